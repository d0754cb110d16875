//! Axum router configuration for webhook endpoints.

use axum::{routing::post, Router};

use super::handlers::receive_webhook;
use crate::adapters::http::state::AppState;

/// Webhooks need no user authentication; they are verified by signature.
///
/// # Routes
/// - `POST /webhook` - Handle Stripe webhooks
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook", post(receive_webhook))
}
