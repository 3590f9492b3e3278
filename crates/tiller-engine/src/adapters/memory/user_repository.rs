//! In-memory implementation of UserRepository

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use tiller::domain::{DomainError, User};
use tiller::ports::UserRepository;

/// In-memory User repository
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    async fn find(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::Repository("Failed to acquire write lock".to_string()))?;
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}
