//! Payment Gateway Port

use async_trait::async_trait;

use crate::domain::entities::RefundReceipt;
use crate::domain::errors::DomainError;
use crate::domain::intents::RefundInstruction;

/// Payment settlement interface
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Issue a refund exactly as instructed
    ///
    /// The instruction is complete; an implementation must not need to
    /// read the order back to execute it.
    async fn issue_refund(
        &self,
        instruction: &RefundInstruction,
    ) -> Result<RefundReceipt, DomainError>;

    /// Name of the backing provider
    fn name(&self) -> &str;
}
