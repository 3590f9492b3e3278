//! Market data entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;

/// A point-in-time price observation for one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub symbol: String,
    pub price: Money,
    pub observed_at: DateTime<Utc>,
}

impl PriceSnapshot {
    pub fn new(symbol: impl Into<String>, price: Money, observed_at: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            observed_at,
        }
    }
}
