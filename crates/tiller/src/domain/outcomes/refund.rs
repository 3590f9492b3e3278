//! Refund outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::intents::RefundInstruction;

/// Result of deciding whether an order gets refunded
///
/// A refund that should not happen is still a decided outcome with its
/// reason attached; the decision never returns an empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RefundDecision {
    /// Refund approved; `refund` is the instruction for the interpreter
    Approved { refund: RefundInstruction },
    /// The order was refunded earlier
    AlreadyRefunded {
        order_id: Uuid,
        refunded_at: Option<DateTime<Utc>>,
    },
    /// No refund is due
    Skipped { reason: String },
}

impl RefundDecision {
    /// Discriminant of this decision
    pub fn kind(&self) -> &'static str {
        match self {
            RefundDecision::Approved { .. } => "approved",
            RefundDecision::AlreadyRefunded { .. } => "already_refunded",
            RefundDecision::Skipped { .. } => "skipped",
        }
    }
}
