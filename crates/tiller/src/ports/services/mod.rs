//! Service Ports
//!
//! Abstract interfaces for outbound effects and external reads.

pub mod advisor;
pub mod mailer;
pub mod market_data;
pub mod payment_gateway;

pub use advisor::Advisor;
pub use mailer::Mailer;
pub use market_data::MarketData;
pub use payment_gateway::PaymentGateway;
