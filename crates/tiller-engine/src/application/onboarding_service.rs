//! Onboarding Application Service
//!
//! Fetches the user, decides the follow-up intent, and hands it to the
//! interpreter. The run result keeps the decided intent and its
//! execution report side by side.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use tiller::domain::decisions::{decide_signup_action, OnboardingConfig};
use tiller::domain::{DomainError, ExecutionReport, OnboardingIntent};
use tiller::ports::UserRepository;

use crate::interpreter::Interpreter;

/// One onboarding pass: what was decided and what happened
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingRun {
    pub intent: OnboardingIntent,
    pub execution: ExecutionReport,
}

/// Application service for signup follow-ups
pub struct OnboardingService<R: UserRepository> {
    repo: Arc<R>,
    interpreter: Arc<Interpreter>,
    config: OnboardingConfig,
}

impl<R: UserRepository> OnboardingService<R> {
    pub fn new(repo: Arc<R>, interpreter: Arc<Interpreter>, config: OnboardingConfig) -> Self {
        Self {
            repo,
            interpreter,
            config,
        }
    }

    /// Run the welcome flow for one user
    pub async fn welcome(&self, user_id: Uuid) -> Result<OnboardingRun, DomainError> {
        let user = self.repo.get(user_id).await?;

        let intent = decide_signup_action(&user, &self.config);
        let execution = self.interpreter.interpret_onboarding(&intent).await;

        tracing::info!(
            "Onboarding for {}: decided {}, execution {}",
            user.email,
            intent.kind(),
            execution.kind()
        );

        Ok(OnboardingRun { intent, execution })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryUserRepository, RecordingGateway, RecordingMailer};
    use chrono::Utc;
    use tiller::domain::User;

    struct Fixture {
        mailer: Arc<RecordingMailer>,
        service: OnboardingService<MemoryUserRepository>,
        user_id: Uuid,
    }

    async fn fixture(vip: bool) -> Fixture {
        let repo = Arc::new(MemoryUserRepository::new());
        let user = User::new("dana@example.com", "Dana", vip, Utc::now());
        let user_id = user.id;
        repo.save(&user).await.unwrap();

        let mailer = Arc::new(RecordingMailer::new());
        let interpreter = Arc::new(Interpreter::new(
            mailer.clone(),
            Arc::new(RecordingGateway::new()),
        ));

        Fixture {
            mailer,
            service: OnboardingService::new(repo, interpreter, OnboardingConfig::default()),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_vip_welcome_sends_mail() {
        let fx = fixture(true).await;

        let run = fx.service.welcome(fx.user_id).await.unwrap();

        assert_eq!(run.intent.kind(), "send_welcome_email");
        assert!(run.execution.is_executed());
        assert_eq!(fx.mailer.sent().len(), 1);
        assert_eq!(fx.mailer.sent()[0].to, "dana@example.com");
    }

    #[tokio::test]
    async fn test_regular_welcome_is_skipped_without_calls() {
        let fx = fixture(false).await;

        let run = fx.service.welcome(fx.user_id).await.unwrap();

        assert_eq!(run.intent, OnboardingIntent::NoOp);
        assert_eq!(run.execution, ExecutionReport::Skipped);
        assert_eq!(fx.mailer.sent().len(), 0);
    }

    #[tokio::test]
    async fn test_mailer_failure_keeps_the_decided_intent() {
        let fx = fixture(true).await;
        fx.mailer.fail_with("relay down");

        let run = fx.service.welcome(fx.user_id).await.unwrap();

        // the decision stands; only the execution failed
        assert_eq!(run.intent.kind(), "send_welcome_email");
        assert_eq!(run.execution.kind(), "failed");
    }

    #[tokio::test]
    async fn test_unknown_user_short_circuits() {
        let fx = fixture(true).await;

        let err = fx.service.welcome(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(fx.mailer.sent().len(), 0);
    }
}
