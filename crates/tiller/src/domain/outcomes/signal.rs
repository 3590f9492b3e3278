//! Trading signal outcomes

use serde::{Deserialize, Serialize};

/// The position a signal calculation recommends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAction {
    Buy,
    Hold,
    Sell,
}

impl std::fmt::Display for SignalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "buy"),
            SignalAction::Hold => write!(f, "hold"),
            SignalAction::Sell => write!(f, "sell"),
        }
    }
}

/// A signal with the reasoning behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDecision {
    pub action: SignalAction,
    pub reason: String,
}
