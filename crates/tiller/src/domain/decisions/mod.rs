//! Decision Functions
//!
//! The pure half of every operation: plain data and explicit config
//! in, an outcome or intent union out. No I/O, no clocks, no
//! environment reads - the orchestration layer fetches beforehand and
//! persists afterwards.

pub mod refund;
pub mod signal;
pub mod signup;
pub mod withdraw;

pub use refund::process_refund;
pub use signal::{calculate_signal, SignalConfig};
pub use signup::{decide_signup_action, OnboardingConfig};
pub use withdraw::withdraw;
