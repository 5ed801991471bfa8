use crate::{common::money::Money, domain::transaction::Transaction};

/// Insertion-ordered transactions with a derived balance.
///
/// The ledger performs no validation: sign, id uniqueness and date order are
/// the caller's responsibility.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Appends `tx` after every existing entry.
    pub fn run_transaction(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Sum of all amounts, recomputed on every call.
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
