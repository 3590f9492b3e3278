//! Domain Errors
//!
//! Infrastructure-facing error types for capability operations.
//!
//! These are *not* business outcomes. A business outcome such as
//! "insufficient funds" belongs in the operation's outcome union
//! (see `domain::outcomes`); `DomainError` covers the conditions an
//! adapter or orchestration layer must translate or abort on.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by capability operations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {service}: {message}")]
    ExternalService { service: String, message: String },
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity: T, id: Uuid) -> Self {
        Self::NotFound {
            entity: entity.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn external<S: AsRef<str>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.as_ref().to_string(),
            message: message.into(),
        }
    }
}
