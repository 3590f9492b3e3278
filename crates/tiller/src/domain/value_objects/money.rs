//! Money - Monetary amounts in minor units
//!
//! Integer-backed to keep arithmetic exact; the currency is implied by
//! the surrounding context (single-currency ledger).

use serde::{Deserialize, Serialize};

/// A monetary amount in minor units (e.g. cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtraction that refuses to go negative
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        if other.0 > self.0 {
            None
        } else {
            Some(Money(self.0 - other.0))
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sub_refuses_overdraw() {
        assert_eq!(Money::new(50).checked_sub(Money::new(100)), None);
        assert_eq!(
            Money::new(100).checked_sub(Money::new(50)),
            Some(Money::new(50))
        );
    }
}
