//! Recording mailer
//!
//! Records every message instead of sending it, and can be switched
//! into a failure mode to exercise the interpreter's failure path.
//! Because it holds nothing but what it is handed, it doubles as the
//! "no external lookups allowed" check for intent completeness.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use tiller::domain::{DeliveryReceipt, DomainError, EmailMessage};
use tiller::ports::Mailer;

/// Mailer double that records accepted messages
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = Some(message.into());
        }
    }

    /// Messages accepted so far, in send order
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.read().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DomainError> {
        let failure = self
            .failure
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?
            .clone();
        if let Some(reason) = failure {
            return Err(DomainError::external("mailer", reason));
        }

        let mut sent = self
            .sent
            .write()
            .map_err(|_| DomainError::Repository("Failed to acquire write lock".to_string()))?;
        sent.push(message.clone());

        Ok(DeliveryReceipt {
            message_id: Uuid::new_v4(),
            accepted_at: Utc::now(),
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}
