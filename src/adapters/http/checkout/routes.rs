//! Axum router configuration for checkout endpoints.

use axum::{routing::post, Router};

use super::handlers::create_checkout;
use crate::adapters::http::state::AppState;

/// # Routes
/// - `POST /checkout` - Create a checkout session
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/checkout", post(create_checkout))
}
