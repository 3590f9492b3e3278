//! SignalMode - Risk appetite for signal calculation

use serde::{Deserialize, Serialize};

/// How eagerly the signal calculation commits to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalMode {
    Aggressive,
    Conservative,
}

impl std::fmt::Display for SignalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalMode::Aggressive => write!(f, "aggressive"),
            SignalMode::Conservative => write!(f, "conservative"),
        }
    }
}

impl std::str::FromStr for SignalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aggressive" => Ok(SignalMode::Aggressive),
            "conservative" => Ok(SignalMode::Conservative),
            _ => Err(format!("Unknown signal mode: {}", s)),
        }
    }
}
