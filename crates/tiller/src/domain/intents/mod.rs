//! Intents
//!
//! Inert, serializable descriptions of side effects. An intent holds
//! plain data only, with no live handles and nothing that needs a
//! further lookup at execution time, and is consumed by exactly one
//! interpreter invocation.

pub mod onboarding;
pub mod refund;

pub use onboarding::OnboardingIntent;
pub use refund::RefundInstruction;
