//! Execution reports
//!
//! Per-intent outcomes produced by the interpreter. A failed execution
//! is reported here; it never alters or re-labels the decision that
//! produced the intent. The error is carried as rendered text so that
//! a report stays plain serializable data.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeliveryReceipt, RefundReceipt};

/// The kind of side effect an intent asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    SendEmail,
    IssueRefund,
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectKind::SendEmail => write!(f, "send_email"),
            EffectKind::IssueRefund => write!(f, "issue_refund"),
        }
    }
}

/// What a capability handed back for an executed effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectReceipt {
    Email(DeliveryReceipt),
    Refund(RefundReceipt),
}

/// Result of interpreting one intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionReport {
    /// The side effect was performed
    Executed {
        effect: EffectKind,
        receipt: EffectReceipt,
    },
    /// The capability reported a failure; the intent was consumed
    Failed { effect: EffectKind, error: String },
    /// A no-op intent; nothing was performed and no capability was called
    Skipped,
}

impl ExecutionReport {
    /// Discriminant of this report
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionReport::Executed { .. } => "executed",
            ExecutionReport::Failed { .. } => "failed",
            ExecutionReport::Skipped => "skipped",
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, ExecutionReport::Executed { .. })
    }
}
