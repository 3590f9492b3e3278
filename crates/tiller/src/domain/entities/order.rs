//! Order - A placed order and its refund window

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Money, OrderStatus};

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub total: Money,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    /// Hours after `placed_at` during which a refund may be issued
    pub refund_window_hours: i64,
    pub refunded_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create a freshly placed order
    pub fn new(
        customer_id: Uuid,
        total: Money,
        refund_window_hours: i64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            total,
            status: OrderStatus::Placed,
            placed_at,
            refund_window_hours,
            refunded_at: None,
        }
    }

    /// Whether `now` still falls inside the refund window
    pub fn within_refund_window(&self, now: DateTime<Utc>) -> bool {
        now <= self.placed_at + Duration::hours(self.refund_window_hours)
    }

    /// Copy of this order marked as refunded at `now`
    pub fn refunded(&self, now: DateTime<Utc>) -> Order {
        Order {
            status: OrderStatus::Refunded,
            refunded_at: Some(now),
            ..self.clone()
        }
    }
}

/// Receipt returned by a payment gateway after a refund settles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundReceipt {
    pub refund_id: Uuid,
    pub order_id: Uuid,
    pub amount: Money,
    pub settled_at: DateTime<Utc>,
}
