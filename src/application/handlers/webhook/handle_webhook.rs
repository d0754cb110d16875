//! HandleWebhookHandler - Command handler for inbound Stripe webhooks.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::webhook::{
    DispatchError, DispatchOutcome, EventHandlerRegistry, StripeWebhookVerifier,
    VerificationError, WebhookEnvelope,
};

/// Command to handle a webhook delivery.
#[derive(Debug, Clone)]
pub struct HandleWebhookCommand {
    pub envelope: WebhookEnvelope,
}

/// Why a delivery was not acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleWebhookError {
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Verifies a delivery, then routes the event by type.
///
/// Nothing is dispatched unless verification succeeds.
pub struct HandleWebhookHandler {
    verifier: Arc<StripeWebhookVerifier>,
    registry: Arc<EventHandlerRegistry>,
}

impl HandleWebhookHandler {
    pub fn new(verifier: Arc<StripeWebhookVerifier>, registry: Arc<EventHandlerRegistry>) -> Self {
        Self { verifier, registry }
    }

    pub async fn handle(
        &self,
        cmd: HandleWebhookCommand,
    ) -> Result<DispatchOutcome, HandleWebhookError> {
        let event = self.verifier.verify(&cmd.envelope)?;

        let outcome = self.registry.dispatch(&event).await?;
        match &outcome {
            DispatchOutcome::Handled { event_type } => {
                tracing::debug!(event_id = %event.id, %event_type, "Webhook event handled");
            }
            DispatchOutcome::Ignored { event_type } => {
                tracing::debug!(event_id = %event.id, %event_type, "Webhook event ignored");
            }
        }

        Ok(outcome)
    }
}
