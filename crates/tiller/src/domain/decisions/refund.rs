//! Refund decision
//!
//! Decides whether an order is refunded. The current instant is an
//! explicit argument so the window check stays reproducible.

use chrono::{DateTime, Utc};

use crate::domain::entities::Order;
use crate::domain::intents::RefundInstruction;
use crate::domain::outcomes::RefundDecision;
use crate::domain::value_objects::OrderStatus;

/// Decide a refund request against the order's state at `now`
pub fn process_refund(order: &Order, now: DateTime<Utc>) -> RefundDecision {
    if order.status == OrderStatus::Refunded {
        return RefundDecision::AlreadyRefunded {
            order_id: order.id,
            refunded_at: order.refunded_at,
        };
    }

    if !order.within_refund_window(now) {
        return RefundDecision::Skipped {
            reason: "Order outside refund window".to_string(),
        };
    }

    RefundDecision::Approved {
        refund: RefundInstruction {
            order_id: order.id,
            amount: order.total,
            reason: format!("Customer refund for order {}", order.id),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;
    use chrono::Duration;
    use uuid::Uuid;

    fn mock_order(placed_hours_ago: i64, window_hours: i64) -> Order {
        let placed_at = Utc::now() - Duration::hours(placed_hours_ago);
        Order::new(Uuid::new_v4(), Money::new(2500), window_hours, placed_at)
    }

    #[test]
    fn test_inside_window_is_approved() {
        let order = mock_order(2, 24);
        let decision = process_refund(&order, Utc::now());

        match decision {
            RefundDecision::Approved { refund } => {
                assert_eq!(refund.order_id, order.id);
                assert_eq!(refund.amount, Money::new(2500));
            }
            other => panic!("expected Approved, got {:?}", other),
        }
    }

    #[test]
    fn test_outside_window_is_skipped_with_reason() {
        let order = mock_order(48, 24);
        let decision = process_refund(&order, Utc::now());

        assert_eq!(
            decision,
            RefundDecision::Skipped {
                reason: "Order outside refund window".to_string(),
            }
        );
    }

    #[test]
    fn test_refunded_order_is_not_refunded_twice() {
        let now = Utc::now();
        let order = mock_order(2, 24).refunded(now);

        let decision = process_refund(&order, now);
        assert_eq!(
            decision,
            RefundDecision::AlreadyRefunded {
                order_id: order.id,
                refunded_at: Some(now),
            }
        );
    }
}
