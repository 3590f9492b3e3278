//! Domain Entities
//!
//! Plain business data, free of any storage or transport concern.
//! Adapters map these to and from their backing representations.

pub mod account;
pub mod mail;
pub mod market;
pub mod order;
pub mod user;

pub use account::Account;
pub use mail::{DeliveryReceipt, EmailMessage};
pub use market::PriceSnapshot;
pub use order::{Order, RefundReceipt};
pub use user::User;
