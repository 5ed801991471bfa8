use chrono::{DateTime, Utc};

use crate::common::money::Money;

/// A single ledger entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Caller-generated identifier.
    pub id: String,
    pub amount: Money,
    /// When the transaction happened, not when it was recorded.
    pub date: DateTime<Utc>,
    pub title: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: Money,
        date: DateTime<Utc>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            date,
            title: title.into(),
        }
    }
}
