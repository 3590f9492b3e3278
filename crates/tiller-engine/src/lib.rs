//! Tiller Execution Shell
//!
//! Everything the core is not allowed to do lives here: the intent
//! interpreter, the orchestration services that drive
//! fetch -> decide -> interpret -> persist, and in-memory adapters for
//! every port.
//!
//! The split mirrors the core's contract: `tiller` decides, this crate
//! executes.

pub mod adapters;
pub mod application;
pub mod interpreter;

pub use application::{
    AnnotatedSignal, OnboardingRun, OnboardingService, RefundRun, RefundService, SignalService,
    WithdrawalService,
};
pub use interpreter::Interpreter;
