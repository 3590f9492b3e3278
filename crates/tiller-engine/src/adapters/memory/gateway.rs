//! Recording payment gateway

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use tiller::domain::intents::RefundInstruction;
use tiller::domain::{DomainError, RefundReceipt};
use tiller::ports::PaymentGateway;

/// Gateway double that records issued refunds
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    issued: Arc<RwLock<Vec<RefundInstruction>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent refund fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = Some(message.into());
        }
    }

    /// Instructions settled so far, in issue order
    pub fn issued(&self) -> Vec<RefundInstruction> {
        self.issued.read().map(|i| i.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn issue_refund(
        &self,
        instruction: &RefundInstruction,
    ) -> Result<RefundReceipt, DomainError> {
        let failure = self
            .failure
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?
            .clone();
        if let Some(reason) = failure {
            return Err(DomainError::external("gateway", reason));
        }

        let mut issued = self
            .issued
            .write()
            .map_err(|_| DomainError::Repository("Failed to acquire write lock".to_string()))?;
        issued.push(instruction.clone());

        Ok(RefundReceipt {
            refund_id: Uuid::new_v4(),
            order_id: instruction.order_id,
            amount: instruction.amount,
            settled_at: Utc::now(),
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}
