//! Outcome Unions
//!
//! One closed enum per operation, replacing exceptions for expected
//! business results. Consumers match these exhaustively; adding a
//! variant is a compile error at every dispatch site until handled.

pub mod execution;
pub mod refund;
pub mod signal;
pub mod withdrawal;

pub use execution::{EffectKind, EffectReceipt, ExecutionReport};
pub use refund::RefundDecision;
pub use signal::{SignalAction, SignalDecision};
pub use withdrawal::WithdrawalOutcome;
