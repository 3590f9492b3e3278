//! Intent Interpreter
//!
//! The only component that executes intents. It matches each intent
//! union exhaustively, delegates the actual effect to the injected
//! capability, and reports a per-intent `ExecutionReport`. A failure
//! during execution is part of the report; it never propagates as if
//! the decision itself had failed.

use std::sync::Arc;

use tiller::domain::intents::{OnboardingIntent, RefundInstruction};
use tiller::domain::outcomes::{EffectKind, EffectReceipt, ExecutionReport};
use tiller::ports::{Mailer, PaymentGateway};

/// Executes intents against the injected capabilities
pub struct Interpreter {
    mailer: Arc<dyn Mailer>,
    gateway: Arc<dyn PaymentGateway>,
}

impl Interpreter {
    pub fn new(mailer: Arc<dyn Mailer>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { mailer, gateway }
    }

    /// Execute one onboarding intent
    ///
    /// `NoOp` is acknowledged without touching any capability.
    pub async fn interpret_onboarding(&self, intent: &OnboardingIntent) -> ExecutionReport {
        match intent {
            OnboardingIntent::SendWelcomeEmail(message) => {
                match self.mailer.send(message).await {
                    Ok(receipt) => {
                        tracing::info!("Welcome mail accepted for {}", message.to);
                        ExecutionReport::Executed {
                            effect: EffectKind::SendEmail,
                            receipt: EffectReceipt::Email(receipt),
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Welcome mail for {} failed: {}", message.to, err);
                        ExecutionReport::Failed {
                            effect: EffectKind::SendEmail,
                            error: err.to_string(),
                        }
                    }
                }
            }
            OnboardingIntent::NoOp => ExecutionReport::Skipped,
        }
    }

    /// Execute one refund instruction
    pub async fn interpret_refund(&self, instruction: &RefundInstruction) -> ExecutionReport {
        match self.gateway.issue_refund(instruction).await {
            Ok(receipt) => {
                tracing::info!(
                    "Refund of {} settled for order {}",
                    instruction.amount,
                    instruction.order_id
                );
                ExecutionReport::Executed {
                    effect: EffectKind::IssueRefund,
                    receipt: EffectReceipt::Refund(receipt),
                }
            }
            Err(err) => {
                tracing::warn!("Refund for order {} failed: {}", instruction.order_id, err);
                ExecutionReport::Failed {
                    effect: EffectKind::IssueRefund,
                    error: err.to_string(),
                }
            }
        }
    }

    /// Execute a batch of onboarding intents
    ///
    /// Intents run sequentially in declaration order; a failure is
    /// reported in place and does not stop the rest of the batch.
    /// Nothing is retried.
    pub async fn interpret_onboarding_batch(
        &self,
        intents: &[OnboardingIntent],
    ) -> Vec<ExecutionReport> {
        let mut reports = Vec::with_capacity(intents.len());
        for intent in intents {
            reports.push(self.interpret_onboarding(intent).await);
        }
        reports
    }
}
