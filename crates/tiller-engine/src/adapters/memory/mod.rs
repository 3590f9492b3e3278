//! In-memory adapters
//!
//! Reference implementations of every port. The repositories back the
//! demo CLI and the test suite; the recording doubles additionally
//! expose what they were asked to do, so tests can assert on effects
//! without real infrastructure.

pub mod account_repository;
pub mod advisor;
pub mod gateway;
pub mod mailer;
pub mod market_data;
pub mod order_repository;
pub mod user_repository;

pub use account_repository::MemoryAccountRepository;
pub use advisor::CannedAdvisor;
pub use gateway::RecordingGateway;
pub use mailer::RecordingMailer;
pub use market_data::FixedMarketData;
pub use order_repository::MemoryOrderRepository;
pub use user_repository::MemoryUserRepository;
