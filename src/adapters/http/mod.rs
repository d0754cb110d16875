//! HTTP adapters - Axum routes for the relay.
//!
//! Each feature has its own handlers and routes; `app_router` merges them
//! over a single `AppState`.

pub mod checkout;
pub mod dto;
pub mod error;
pub mod health;
pub mod pages;
pub mod state;
pub mod webhook;

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use checkout::checkout_routes;
pub use error::ApiError;
pub use health::health_routes;
pub use pages::page_routes;
pub use state::AppState;
pub use webhook::webhook_routes;

/// Builds the complete router.
///
/// # Routes
/// - `GET /` - Checkout page
/// - `POST /checkout` - Create a checkout session
/// - `POST /webhook` - Stripe webhooks
/// - `GET /success`, `GET /cancel` - Redirect landing pages
/// - `GET /health` - Liveness probe
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(checkout_routes())
        .merge(webhook_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Wraps `router` with request ids, tracing and a request timeout.
pub fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(request_timeout));

    router.layer(middleware)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use secrecy::SecretString;

    use super::AppState;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::domain::checkout::{CheckoutMode, CheckoutSessionRequest, LineItem};
    use crate::domain::webhook::{
        EventHandlerRegistry, EventType, RecordingHandler, StripeWebhookVerifier,
    };
    use crate::ports::PaymentProvider;

    pub const TEST_WEBHOOK_SECRET: &str = "whsec_test_http";

    pub fn test_state() -> AppState {
        test_state_with(Arc::new(MockPaymentProvider::new()))
    }

    pub fn test_state_with(provider: Arc<dyn PaymentProvider>) -> AppState {
        let verifier = StripeWebhookVerifier::new(SecretString::new(TEST_WEBHOOK_SECRET.to_string()));
        let registry = EventHandlerRegistry::new().register_all(
            EventType::RECOGNIZED.iter().map(|t| t.as_str()),
            Arc::new(RecordingHandler::new()),
        );
        let request = CheckoutSessionRequest::single(
            LineItem::new("price_test_http", 1),
            CheckoutMode::Payment,
            "http://localhost:3000/success",
            "http://localhost:3000/cancel",
        );

        AppState::new(verifier, registry, provider, request, "pk_test_pages")
    }
}
