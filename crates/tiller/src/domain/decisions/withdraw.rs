//! Withdrawal decision
//!
//! Decides whether an account can be debited. Pure: the account is
//! data already fetched by the orchestration layer, the clock is an
//! explicit argument, and the result is a value - nothing is persisted
//! here.

use chrono::{DateTime, Utc};

use crate::domain::entities::Account;
use crate::domain::outcomes::WithdrawalOutcome;
use crate::domain::value_objects::{AccountStatus, Money};

/// Decide a withdrawal against the account's current state
///
/// Callers are expected to pass a positive `amount`; the orchestration
/// layer rejects malformed requests before deciding.
pub fn withdraw(account: &Account, amount: Money, now: DateTime<Utc>) -> WithdrawalOutcome {
    if account.status == AccountStatus::Frozen {
        return WithdrawalOutcome::AccountFrozen {
            account_id: account.id,
            status: account.status,
        };
    }

    match account.debited(amount, now) {
        Some(updated) => WithdrawalOutcome::Completed {
            account: updated,
            amount_withdrawn: amount,
        },
        None => WithdrawalOutcome::InsufficientFunds {
            current_balance: account.balance,
            requested_amount: amount,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_account(balance: i64) -> Account {
        Account::new("alice", Money::new(balance), Utc::now())
    }

    #[test]
    fn test_overdraw_reports_balances() {
        let account = mock_account(50);
        let outcome = withdraw(&account, Money::new(100), Utc::now());

        assert_eq!(
            outcome,
            WithdrawalOutcome::InsufficientFunds {
                current_balance: Money::new(50),
                requested_amount: Money::new(100),
            }
        );
    }

    #[test]
    fn test_covered_withdrawal_completes() {
        let account = mock_account(100);
        let now = Utc::now();
        let outcome = withdraw(&account, Money::new(50), now);

        match outcome {
            WithdrawalOutcome::Completed {
                account: updated,
                amount_withdrawn,
            } => {
                assert_eq!(updated.balance, Money::new(50));
                assert_eq!(amount_withdrawn, Money::new(50));
                assert_eq!(updated.id, account.id);
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[test]
    fn test_frozen_account_is_not_debited() {
        let mut account = mock_account(100);
        account.status = AccountStatus::Frozen;

        let outcome = withdraw(&account, Money::new(10), Utc::now());
        assert_eq!(outcome.kind(), "account_frozen");
    }

    #[test]
    fn test_decision_is_repeatable() {
        let account = mock_account(100);
        let now = Utc::now();

        let first = withdraw(&account, Money::new(30), now);
        let second = withdraw(&account, Money::new(30), now);
        assert_eq!(first, second);
        // the input account is untouched
        assert_eq!(account.balance, Money::new(100));
    }
}
