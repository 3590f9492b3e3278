//! In-memory implementation of AccountRepository
//!
//! Thread-safe via RwLock; useful for tests, demos, and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use tiller::domain::{Account, DomainError};
use tiller::ports::AccountRepository;

/// In-memory Account repository
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn get(&self, id: Uuid) -> Result<Account, DomainError> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Account", id))
    }

    async fn find(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?;
        Ok(accounts.values().cloned().collect())
    }

    async fn save(&self, account: &Account) -> Result<Account, DomainError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| DomainError::Repository("Failed to acquire write lock".to_string()))?;
        accounts.insert(account.id, account.clone());
        Ok(account.clone())
    }
}
