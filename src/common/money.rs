use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
const SCALE: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in minor currency units (cents).
///
/// Positive values are credits, negative values are debits. Arithmetic
/// saturates at the `i64` bounds so summing a ledger can never panic.
///
/// # Examples
/// ```
/// use wallet_core::common::money::Money;
///
/// let amount = Money::from_minor(-1250);
/// assert_eq!(amount.minor_units(), -1250);
/// assert_eq!(amount.to_string_2dp(), "-12.50");
/// assert!(amount.is_debit());
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_minor(value: i64) -> Self {
        Money(value)
    }

    /// Whole currency units, e.g. `Money::from_major(5)` is 5.00.
    pub fn from_major(value: i64) -> Self {
        Money(value.saturating_mul(SCALE))
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_credit(&self) -> bool {
        self.0 > 0
    }

    pub fn is_debit(&self) -> bool {
        self.0 < 0
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
