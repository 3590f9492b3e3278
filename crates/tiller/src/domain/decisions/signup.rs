//! Signup follow-up decision
//!
//! Decides what (if anything) to do after a user signs up. The result
//! is an intent: constructing it sends nothing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{EmailMessage, User};
use crate::domain::intents::OnboardingIntent;

/// Templates for onboarding mail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Subject line for the VIP welcome mail
    pub vip_subject: String,
    /// Name the mail signs off with
    pub sender_name: String,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            vip_subject: "Welcome VIP".to_string(),
            sender_name: "The Tiller Team".to_string(),
        }
    }
}

/// Decide the follow-up action for a fresh signup
///
/// VIP signups get a welcome mail; everyone else gets an explicit
/// no-op, so the caller always receives a decided value.
pub fn decide_signup_action(user: &User, config: &OnboardingConfig) -> OnboardingIntent {
    if !user.vip {
        return OnboardingIntent::NoOp;
    }

    let body = format!(
        "Hello {},\n\nYour VIP account is ready.\n\n{}",
        user.display_name, config.sender_name
    );

    OnboardingIntent::SendWelcomeEmail(EmailMessage::new(
        user.email.clone(),
        config.vip_subject.clone(),
        body,
    ))
}
