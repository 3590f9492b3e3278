//! User Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, User};

/// Repository interface for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user; a missing id is the declared `NotFound` error
    async fn get(&self, id: Uuid) -> Result<User, DomainError>;

    /// Look up a user where absence is an expected answer
    async fn find(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Save a user (insert or update)
    async fn save(&self, user: &User) -> Result<User, DomainError>;
}
