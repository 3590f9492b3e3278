//! Signal Application Service
//!
//! Fetches a price snapshot, runs the pure signal calculation, then
//! asks the advisor for commentary. The decision is made before the
//! advisor is consulted; a broken advisor costs the commentary, never
//! the decision.

use std::sync::Arc;

use serde::Serialize;

use tiller::domain::decisions::{calculate_signal, SignalConfig};
use tiller::domain::{DomainError, PriceSnapshot, SignalDecision};
use tiller::ports::{Advisor, MarketData};

/// A signal decision with optional advisor commentary
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedSignal {
    pub snapshot: PriceSnapshot,
    pub decision: SignalDecision,
    pub commentary: Option<String>,
}

/// Application service for signal evaluation
pub struct SignalService<M: MarketData, A: Advisor> {
    market: Arc<M>,
    advisor: Arc<A>,
}

impl<M: MarketData, A: Advisor> SignalService<M, A> {
    pub fn new(market: Arc<M>, advisor: Arc<A>) -> Self {
        Self { market, advisor }
    }

    /// Evaluate one instrument under the given config
    pub async fn evaluate(
        &self,
        symbol: &str,
        config: &SignalConfig,
    ) -> Result<AnnotatedSignal, DomainError> {
        let snapshot = self.market.latest(symbol).await?;

        let decision = calculate_signal(&snapshot, config);

        let commentary = match self.advisor.narrate(&snapshot, &decision).await {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!("Advisor unavailable for {}: {}", symbol, err);
                None
            }
        };

        Ok(AnnotatedSignal {
            snapshot,
            decision,
            commentary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{CannedAdvisor, FixedMarketData};
    use chrono::Utc;
    use tiller::domain::value_objects::{Money, SignalMode};
    use tiller::domain::SignalAction;

    fn service(price: i64) -> SignalService<FixedMarketData, CannedAdvisor> {
        let market = FixedMarketData::new().with_quote(PriceSnapshot::new(
            "ACME",
            Money::new(price),
            Utc::now(),
        ));
        SignalService::new(Arc::new(market), Arc::new(CannedAdvisor::new()))
    }

    fn config(threshold: i64, mode: SignalMode) -> SignalConfig {
        SignalConfig {
            threshold: Money::new(threshold),
            mode,
        }
    }

    #[tokio::test]
    async fn test_aggressive_config_buys() {
        let service = service(100);

        let annotated = service
            .evaluate("ACME", &config(70, SignalMode::Aggressive))
            .await
            .unwrap();

        assert_eq!(annotated.decision.action, SignalAction::Buy);
        assert!(annotated.commentary.is_some());
    }

    #[tokio::test]
    async fn test_conservative_config_holds_same_price() {
        let service = service(100);

        let annotated = service
            .evaluate("ACME", &config(70, SignalMode::Conservative))
            .await
            .unwrap();

        assert_eq!(annotated.decision.action, SignalAction::Hold);
    }

    #[tokio::test]
    async fn test_advisor_failure_downgrades_to_no_commentary() {
        let market = FixedMarketData::new().with_quote(PriceSnapshot::new(
            "ACME",
            Money::new(100),
            Utc::now(),
        ));
        let advisor = Arc::new(CannedAdvisor::new());
        advisor.fail_with("model overloaded");
        let service = SignalService::new(Arc::new(market), advisor);

        let annotated = service
            .evaluate("ACME", &config(70, SignalMode::Aggressive))
            .await
            .unwrap();

        assert_eq!(annotated.decision.action, SignalAction::Buy);
        assert!(annotated.commentary.is_none());
    }

    #[tokio::test]
    async fn test_unknown_symbol_short_circuits() {
        let service = service(100);

        let err = service
            .evaluate("NOPE", &SignalConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
