//! Withdrawal Application Service
//!
//! Orchestrates a withdrawal: fetch the account, run the pure
//! decision, persist the new state when the withdrawal completed.
//! A missing account short-circuits before the decision runs.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use tiller::domain::decisions::withdraw;
use tiller::domain::{DomainError, Money, WithdrawalOutcome};
use tiller::ports::AccountRepository;

/// Application service for withdrawals
pub struct WithdrawalService<R: AccountRepository> {
    repo: Arc<R>,
}

impl<R: AccountRepository> WithdrawalService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Withdraw `amount` from the account
    pub async fn withdraw(
        &self,
        account_id: Uuid,
        amount: Money,
    ) -> Result<WithdrawalOutcome, DomainError> {
        if !amount.is_positive() {
            return Err(DomainError::Validation(format!(
                "Withdrawal amount must be positive, got {}",
                amount
            )));
        }

        let account = self.repo.get(account_id).await?;
        let outcome = withdraw(&account, amount, Utc::now());

        if let WithdrawalOutcome::Completed {
            account: updated, ..
        } = &outcome
        {
            self.repo.save(updated).await?;
            tracing::info!(
                "Withdrew {} from account {}, balance now {}",
                amount,
                account_id,
                updated.balance
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryAccountRepository;
    use tiller::domain::Account;

    async fn seeded_service(balance: i64) -> (Uuid, WithdrawalService<MemoryAccountRepository>) {
        let repo = Arc::new(MemoryAccountRepository::new());
        let account = Account::new("alice", Money::new(balance), Utc::now());
        let id = account.id;
        repo.save(&account).await.unwrap();
        (id, WithdrawalService::new(repo))
    }

    #[tokio::test]
    async fn test_completed_withdrawal_is_persisted() {
        let (id, service) = seeded_service(100).await;

        let outcome = service.withdraw(id, Money::new(50)).await.unwrap();
        assert_eq!(outcome.kind(), "completed");

        // a second withdrawal sees the persisted balance
        let outcome = service.withdraw(id, Money::new(60)).await.unwrap();
        assert_eq!(
            outcome,
            WithdrawalOutcome::InsufficientFunds {
                current_balance: Money::new(50),
                requested_amount: Money::new(60),
            }
        );
    }

    #[tokio::test]
    async fn test_insufficient_funds_changes_nothing() {
        let (id, service) = seeded_service(50).await;

        let outcome = service.withdraw(id, Money::new(100)).await.unwrap();
        assert_eq!(outcome.kind(), "insufficient_funds");

        let outcome = service.withdraw(id, Money::new(50)).await.unwrap();
        assert_eq!(outcome.kind(), "completed");
    }

    #[tokio::test]
    async fn test_missing_account_short_circuits() {
        let repo = Arc::new(MemoryAccountRepository::new());
        let service = WithdrawalService::new(repo);

        let err = service
            .withdraw(Uuid::new_v4(), Money::new(10))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_rejected_before_fetch() {
        let (id, service) = seeded_service(100).await;

        let err = service.withdraw(id, Money::ZERO).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
