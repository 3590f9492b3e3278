//! Application Services (Use Cases)
//!
//! The imperative shell. Each service owns one flow of
//! fetch (capability) -> decide (pure) -> interpret (intents) ->
//! persist (capability), and translates infrastructure failures before
//! they reach a decision function.

pub mod onboarding_service;
pub mod refund_service;
pub mod signal_service;
pub mod withdrawal_service;

pub use onboarding_service::{OnboardingRun, OnboardingService};
pub use refund_service::{RefundRun, RefundService};
pub use signal_service::{AnnotatedSignal, SignalService};
pub use withdrawal_service::WithdrawalService;
