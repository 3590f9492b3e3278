//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, outcome unions, intents,
//! decision functions, and errors.

pub mod decisions;
pub mod entities;
pub mod errors;
pub mod intents;
pub mod outcomes;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{Account, DeliveryReceipt, EmailMessage, Order, PriceSnapshot, RefundReceipt, User};
pub use errors::DomainError;
pub use intents::{OnboardingIntent, RefundInstruction};
pub use outcomes::{
    EffectKind, EffectReceipt, ExecutionReport, RefundDecision, SignalAction, SignalDecision,
    WithdrawalOutcome,
};
pub use value_objects::{AccountStatus, Money, OrderStatus, SignalMode};
