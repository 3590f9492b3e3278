//! Advisor Port
//!
//! Abstract interface for an inference-backed commentary step. The
//! advisor never makes the decision - `calculate_signal` has already
//! run by the time it is consulted - it only narrates it. This keeps
//! the inference backend (an LLM, a rules engine, a canned double)
//! swappable without touching decision logic.

use async_trait::async_trait;

use crate::domain::entities::PriceSnapshot;
use crate::domain::errors::DomainError;
use crate::domain::outcomes::SignalDecision;

/// Commentary interface for signal decisions
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Produce a short narration of a decision for human readers
    async fn narrate(
        &self,
        snapshot: &PriceSnapshot,
        decision: &SignalDecision,
    ) -> Result<String, DomainError>;

    /// Name of the backing model or engine
    fn name(&self) -> &str;
}
