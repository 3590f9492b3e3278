//! Account - Ledger account for a single customer
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{AccountStatus, Money};

/// A customer's ledger account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub owner: String,
    pub balance: Money,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new active account with an opening balance
    pub fn new(owner: impl Into<String>, opening_balance: Money, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            balance: opening_balance,
            status: AccountStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of this account with the balance reduced by `amount`
    ///
    /// Returns `None` when the balance does not cover the amount.
    /// State transitions are expressed as new values; the stored
    /// account is only replaced by the orchestration layer.
    pub fn debited(&self, amount: Money, now: DateTime<Utc>) -> Option<Account> {
        let balance = self.balance.checked_sub(amount)?;
        Some(Account {
            balance,
            updated_at: now,
            ..self.clone()
        })
    }
}
