//! Withdrawal outcomes
//!
//! The closed set of results a withdrawal decision can produce. Every
//! variant carries the payload a caller needs to act on it; failure to
//! withdraw is an outcome here, never an `Err` or a panic.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::domain::value_objects::{AccountStatus, Money};

/// Result of asking to withdraw from an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WithdrawalOutcome {
    /// The withdrawal went through; `account` is the new state
    Completed {
        account: Account,
        amount_withdrawn: Money,
    },
    /// The balance does not cover the requested amount
    InsufficientFunds {
        current_balance: Money,
        requested_amount: Money,
    },
    /// The account cannot be debited in its current status
    AccountFrozen {
        account_id: Uuid,
        status: AccountStatus,
    },
}

impl WithdrawalOutcome {
    /// Discriminant of this outcome
    pub fn kind(&self) -> &'static str {
        match self {
            WithdrawalOutcome::Completed { .. } => "completed",
            WithdrawalOutcome::InsufficientFunds { .. } => "insufficient_funds",
            WithdrawalOutcome::AccountFrozen { .. } => "account_frozen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_carries_its_discriminant() {
        let outcome = WithdrawalOutcome::InsufficientFunds {
            current_balance: Money::new(50),
            requested_amount: Money::new(100),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "insufficient_funds");
        assert_eq!(json["current_balance"], 50);
        assert_eq!(json["requested_amount"], 100);

        let back: WithdrawalOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);
    }
}
