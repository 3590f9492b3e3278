//! Refund Application Service
//!
//! Fetch the order, decide, hand an approved instruction to the
//! interpreter, and persist the refunded order only once the gateway
//! settled. A gateway failure leaves the order untouched so the run
//! can be repeated.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use tiller::domain::decisions::process_refund;
use tiller::domain::{DomainError, ExecutionReport, RefundDecision};
use tiller::ports::OrderRepository;

use crate::interpreter::Interpreter;

/// One refund pass: the decision and, when approved, its execution
#[derive(Debug, Clone, Serialize)]
pub struct RefundRun {
    pub decision: RefundDecision,
    pub execution: Option<ExecutionReport>,
}

/// Application service for refunds
pub struct RefundService<R: OrderRepository> {
    repo: Arc<R>,
    interpreter: Arc<Interpreter>,
}

impl<R: OrderRepository> RefundService<R> {
    pub fn new(repo: Arc<R>, interpreter: Arc<Interpreter>) -> Self {
        Self { repo, interpreter }
    }

    /// Run the refund flow for one order
    pub async fn refund(&self, order_id: Uuid) -> Result<RefundRun, DomainError> {
        let order = self.repo.get(order_id).await?;
        let now = Utc::now();

        let decision = process_refund(&order, now);

        let execution = match &decision {
            RefundDecision::Approved { refund } => {
                let report = self.interpreter.interpret_refund(refund).await;
                if report.is_executed() {
                    self.repo.save(&order.refunded(now)).await?;
                    tracing::info!("Order {} refunded for {}", order_id, refund.amount);
                }
                Some(report)
            }
            RefundDecision::AlreadyRefunded { .. } | RefundDecision::Skipped { .. } => None,
        };

        Ok(RefundRun {
            decision,
            execution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryOrderRepository, RecordingGateway, RecordingMailer};
    use chrono::Duration;
    use tiller::domain::value_objects::{Money, OrderStatus};
    use tiller::domain::Order;

    struct Fixture {
        repo: Arc<MemoryOrderRepository>,
        gateway: Arc<RecordingGateway>,
        service: RefundService<MemoryOrderRepository>,
    }

    fn fixture() -> Fixture {
        let repo = Arc::new(MemoryOrderRepository::new());
        let gateway = Arc::new(RecordingGateway::new());
        let interpreter = Arc::new(Interpreter::new(
            Arc::new(RecordingMailer::new()),
            gateway.clone(),
        ));
        Fixture {
            repo: repo.clone(),
            gateway,
            service: RefundService::new(repo, interpreter),
        }
    }

    async fn seed_order(fx: &Fixture, placed_hours_ago: i64, window_hours: i64) -> Uuid {
        let order = Order::new(
            Uuid::new_v4(),
            Money::new(2500),
            window_hours,
            Utc::now() - Duration::hours(placed_hours_ago),
        );
        let id = order.id;
        fx.repo.save(&order).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_approved_refund_settles_and_persists() {
        let fx = fixture();
        let id = seed_order(&fx, 2, 24).await;

        let run = fx.service.refund(id).await.unwrap();

        assert_eq!(run.decision.kind(), "approved");
        assert!(run.execution.unwrap().is_executed());
        assert_eq!(fx.gateway.issued().len(), 1);
        assert_eq!(
            fx.repo.get(id).await.unwrap().status,
            OrderStatus::Refunded
        );
    }

    #[tokio::test]
    async fn test_late_refund_is_skipped_with_reason() {
        let fx = fixture();
        let id = seed_order(&fx, 48, 24).await;

        let run = fx.service.refund(id).await.unwrap();

        assert_eq!(
            run.decision,
            RefundDecision::Skipped {
                reason: "Order outside refund window".to_string(),
            }
        );
        assert!(run.execution.is_none());
        assert_eq!(fx.gateway.issued().len(), 0);
    }

    #[tokio::test]
    async fn test_second_refund_reports_already_refunded() {
        let fx = fixture();
        let id = seed_order(&fx, 2, 24).await;

        fx.service.refund(id).await.unwrap();
        let run = fx.service.refund(id).await.unwrap();

        assert_eq!(run.decision.kind(), "already_refunded");
        assert_eq!(fx.gateway.issued().len(), 1);
    }

    #[tokio::test]
    async fn test_gateway_failure_leaves_order_placed() {
        let fx = fixture();
        let id = seed_order(&fx, 2, 24).await;
        fx.gateway.fail_with("settlement offline");

        let run = fx.service.refund(id).await.unwrap();

        assert_eq!(run.decision.kind(), "approved");
        assert_eq!(run.execution.unwrap().kind(), "failed");
        assert_eq!(fx.repo.get(id).await.unwrap().status, OrderStatus::Placed);
    }
}
