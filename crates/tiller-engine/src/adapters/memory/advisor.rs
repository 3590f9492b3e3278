//! Canned advisor
//!
//! Stands in for an inference backend. Deterministic, offline.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use tiller::domain::outcomes::SignalDecision;
use tiller::domain::{DomainError, PriceSnapshot};
use tiller::ports::Advisor;

/// Advisor double producing a fixed-format narration
#[derive(Debug, Clone, Default)]
pub struct CannedAdvisor {
    failure: Arc<RwLock<Option<String>>>,
}

impl CannedAdvisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent narration fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = Some(message.into());
        }
    }
}

#[async_trait]
impl Advisor for CannedAdvisor {
    async fn narrate(
        &self,
        snapshot: &PriceSnapshot,
        decision: &SignalDecision,
    ) -> Result<String, DomainError> {
        let failure = self
            .failure
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?
            .clone();
        if let Some(reason) = failure {
            return Err(DomainError::external("advisor", reason));
        }

        Ok(format!(
            "{} looks like a {} at {}",
            snapshot.symbol, decision.action, snapshot.price
        ))
    }

    fn name(&self) -> &str {
        "canned"
    }
}
