//! Market Data Port

use async_trait::async_trait;

use crate::domain::entities::PriceSnapshot;
use crate::domain::errors::DomainError;

/// Price feed interface
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Latest observed price for an instrument
    ///
    /// An unknown symbol surfaces as `DomainError::NotFound`.
    async fn latest(&self, symbol: &str) -> Result<PriceSnapshot, DomainError>;
}
