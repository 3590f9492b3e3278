//! Signal calculation
//!
//! Maps a price observation to a buy/hold/sell recommendation under an
//! explicit configuration. Safe to run many times in parallel with
//! varying configs over the same snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::entities::PriceSnapshot;
use crate::domain::outcomes::{SignalAction, SignalDecision};
use crate::domain::value_objects::{Money, SignalMode};

/// Thresholds for signal calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Price level that triggers interest in the instrument
    pub threshold: Money,
    /// Risk appetite applied to the threshold
    pub mode: SignalMode,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            threshold: Money::new(100),
            mode: SignalMode::Conservative,
        }
    }
}

/// Calculate a signal for one price snapshot
///
/// Aggressive mode buys at the threshold and sells below half of it.
/// Conservative mode waits for 1.5x the threshold before buying and
/// holds until the price drops to a quarter of it.
pub fn calculate_signal(snapshot: &PriceSnapshot, config: &SignalConfig) -> SignalDecision {
    let price = snapshot.price.minor_units();
    let threshold = config.threshold.minor_units();

    let action = match config.mode {
        SignalMode::Aggressive => {
            if price >= threshold {
                SignalAction::Buy
            } else if price * 2 < threshold {
                SignalAction::Sell
            } else {
                SignalAction::Hold
            }
        }
        SignalMode::Conservative => {
            if price * 2 >= threshold * 3 {
                SignalAction::Buy
            } else if price * 4 <= threshold {
                SignalAction::Sell
            } else {
                SignalAction::Hold
            }
        }
    };

    SignalDecision {
        action,
        reason: format!(
            "{} at price {} against threshold {} in {} mode",
            action, snapshot.price, config.threshold, config.mode
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn mock_snapshot(price: i64) -> PriceSnapshot {
        PriceSnapshot::new("ACME", Money::new(price), Utc::now())
    }

    fn config(threshold: i64, mode: SignalMode) -> SignalConfig {
        SignalConfig {
            threshold: Money::new(threshold),
            mode,
        }
    }

    #[test]
    fn test_aggressive_buys_at_threshold() {
        let decision = calculate_signal(
            &mock_snapshot(100),
            &config(70, SignalMode::Aggressive),
        );
        assert_eq!(decision.action, SignalAction::Buy);
    }

    #[test]
    fn test_conservative_holds_at_same_price() {
        let decision = calculate_signal(
            &mock_snapshot(100),
            &config(70, SignalMode::Conservative),
        );
        assert_eq!(decision.action, SignalAction::Hold);
    }

    #[test]
    fn test_aggressive_sells_below_half_threshold() {
        let decision = calculate_signal(
            &mock_snapshot(30),
            &config(70, SignalMode::Aggressive),
        );
        assert_eq!(decision.action, SignalAction::Sell);
    }

    #[test]
    fn test_conservative_buys_far_above_threshold() {
        let decision = calculate_signal(
            &mock_snapshot(105),
            &config(70, SignalMode::Conservative),
        );
        assert_eq!(decision.action, SignalAction::Buy);
    }

    #[test]
    fn test_environment_state_is_irrelevant() {
        let snapshot = mock_snapshot(100);
        let cfg = config(70, SignalMode::Aggressive);

        let before = calculate_signal(&snapshot, &cfg);
        std::env::set_var("TILLER_SIGNAL_MODE", "conservative");
        let after = calculate_signal(&snapshot, &cfg);
        std::env::remove_var("TILLER_SIGNAL_MODE");

        assert_eq!(before, after);
    }
}
