//! Onboarding intents
//!
//! What the signup decision wants done. Constructing one of these has
//! no observable effect; only the interpreter executes them.

use serde::{Deserialize, Serialize};

use crate::domain::entities::EmailMessage;

/// The closed set of effects a signup decision may request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OnboardingIntent {
    /// Send the welcome email exactly as described
    SendWelcomeEmail(EmailMessage),
    /// Decided outcome meaning "nothing to do" - still a value,
    /// never an absent one
    NoOp,
}

impl OnboardingIntent {
    /// Discriminant of this intent
    pub fn kind(&self) -> &'static str {
        match self {
            OnboardingIntent::SendWelcomeEmail(_) => "send_welcome_email",
            OnboardingIntent::NoOp => "no_op",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_is_plain_tagged_data() {
        let intent = OnboardingIntent::SendWelcomeEmail(EmailMessage::new(
            "dana@example.com",
            "Welcome VIP",
            "Hello Dana",
        ));

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["kind"], "send_welcome_email");
        assert_eq!(json["to"], "dana@example.com");

        let back: OnboardingIntent = serde_json::from_value(json).unwrap();
        assert_eq!(back, intent);
    }
}
