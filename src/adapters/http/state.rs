//! Shared application state.

use std::sync::Arc;

use crate::application::{CreateCheckoutSessionHandler, HandleWebhookHandler};
use crate::config::AppConfig;
use crate::domain::checkout::CheckoutSessionRequest;
use crate::domain::webhook::{EventHandlerRegistry, RecordingHandler, StripeWebhookVerifier};
use crate::ports::PaymentProvider;

use super::pages::render_index;

/// Shared application state containing all dependencies.
///
/// Cloned for each request; everything behind it is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<StripeWebhookVerifier>,
    pub registry: Arc<EventHandlerRegistry>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    /// Request sent for every `/checkout` call.
    pub checkout_request: Arc<CheckoutSessionRequest>,
    /// Checkout page with the publishable key already embedded.
    pub index_page: Arc<str>,
}

impl AppState {
    pub fn new(
        verifier: StripeWebhookVerifier,
        registry: EventHandlerRegistry,
        payment_provider: Arc<dyn PaymentProvider>,
        checkout_request: CheckoutSessionRequest,
        publishable_key: &str,
    ) -> Self {
        Self {
            verifier: Arc::new(verifier),
            registry: Arc::new(registry),
            payment_provider,
            checkout_request: Arc::new(checkout_request),
            index_page: render_index(publishable_key).into(),
        }
    }

    /// Wires the verifier, the recording handler and the checkout request from configuration.
    pub fn from_config(config: &AppConfig, payment_provider: Arc<dyn PaymentProvider>) -> Self {
        use secrecy::ExposeSecret;

        let verifier = StripeWebhookVerifier::new(config.payment.stripe_webhook_secret.clone())
            .with_tolerance(config.webhook.tolerance_secs)
            .with_require_livemode(config.payment.require_livemode);
        let registry = EventHandlerRegistry::new().register_all(
            config.webhook.observed_event_list(),
            Arc::new(RecordingHandler::new()),
        );

        tracing::info!(
            observed_events = ?registry.event_types(),
            tolerance_secs = verifier.tolerance_secs(),
            "Webhook dispatch configured"
        );

        Self::new(
            verifier,
            registry,
            payment_provider,
            config.checkout.to_session_request(),
            config.payment.stripe_publishable_key.expose_secret(),
        )
    }

    /// Create handlers on demand from the shared state.
    pub fn checkout_handler(&self) -> CreateCheckoutSessionHandler {
        CreateCheckoutSessionHandler::new(self.payment_provider.clone())
    }

    pub fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(self.verifier.clone(), self.registry.clone())
    }
}
