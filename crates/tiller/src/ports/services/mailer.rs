//! Mailer Port
//!
//! Abstract interface for outbound mail. Implementations (SMTP, an
//! email API, a recording double) live outside the core.

use async_trait::async_trait;

use crate::domain::entities::{DeliveryReceipt, EmailMessage};
use crate::domain::errors::DomainError;

/// Outbound mail interface
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message; the message carries everything needed
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DomainError>;

    /// Name of the backing provider (e.g. "smtp", "recording")
    fn name(&self) -> &str;
}
