//! Tiller Domain Core
//!
//! Outcome unions, intents, and capability ports for building
//! functional-core / imperative-shell services.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business data and logic
//!   - `entities/`: Core domain models (Account, Order, User, PriceSnapshot)
//!   - `value_objects/`: Immutable value types (Money, SignalMode, statuses)
//!   - `outcomes/`: Closed result unions, one per operation
//!   - `intents/`: Side effects as inert data
//!   - `decisions/`: Pure decision functions (fetch-free, clock-free)
//!   - `errors/`: Infrastructure-facing error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Outbound effect and read interfaces
//!
//! The shell - interpreter, orchestration services, adapters - lives in
//! `tiller-engine`. Nothing here performs I/O.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tiller::domain::decisions::{withdraw, process_refund};
//! use tiller::ports::{AccountRepository, Mailer};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    decisions::{
        calculate_signal, decide_signup_action, process_refund, withdraw, OnboardingConfig,
        SignalConfig,
    },
    Account, AccountStatus, DeliveryReceipt, DomainError, EffectKind, EffectReceipt, EmailMessage,
    ExecutionReport, Money, OnboardingIntent, Order, OrderStatus, PriceSnapshot, RefundDecision,
    RefundInstruction, RefundReceipt, SignalAction, SignalDecision, SignalMode, User,
    WithdrawalOutcome,
};
pub use ports::{
    AccountRepository, Advisor, Mailer, MarketData, OrderRepository, PaymentGateway,
    UserRepository,
};
