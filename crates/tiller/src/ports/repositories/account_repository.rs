//! Account Repository Port
//!
//! Abstract interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Account};

/// Repository interface for Account entities
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch an account; a missing id is the declared `NotFound` error,
    /// never a silent absence
    async fn get(&self, id: Uuid) -> Result<Account, DomainError>;

    /// Look up an account where absence is an expected answer
    async fn find(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find all accounts
    async fn find_all(&self) -> Result<Vec<Account>, DomainError>;

    /// Save an account (insert or update)
    async fn save(&self, account: &Account) -> Result<Account, DomainError>;
}
