//! Repository Ports
//!
//! Abstract persistence interfaces. Implementations live in adapter
//! crates; the domain never sees a concrete one.

pub mod account_repository;
pub mod order_repository;
pub mod user_repository;

pub use account_repository::AccountRepository;
pub use order_repository::OrderRepository;
pub use user_repository::UserRepository;
