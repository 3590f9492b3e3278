//! Fixed market data feed

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use tiller::domain::{DomainError, PriceSnapshot};
use tiller::ports::MarketData;

/// Market data double serving preset quotes
#[derive(Debug, Clone, Default)]
pub struct FixedMarketData {
    quotes: Arc<RwLock<HashMap<String, PriceSnapshot>>>,
}

impl FixedMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style quote registration
    pub fn with_quote(self, snapshot: PriceSnapshot) -> Self {
        if let Ok(mut quotes) = self.quotes.write() {
            quotes.insert(snapshot.symbol.clone(), snapshot);
        }
        self
    }
}

#[async_trait]
impl MarketData for FixedMarketData {
    async fn latest(&self, symbol: &str) -> Result<PriceSnapshot, DomainError> {
        let quotes = self
            .quotes
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?;
        quotes.get(symbol).cloned().ok_or_else(|| DomainError::NotFound {
            entity: "PriceSnapshot".to_string(),
            id: symbol.to_string(),
        })
    }
}
