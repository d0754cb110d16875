//! Axum router configuration for the static pages.

use axum::{routing::get, Router};

use super::handlers::{cancel, index, success};
use crate::adapters::http::state::AppState;

/// # Routes
/// - `GET /` - Checkout page
/// - `GET /success` - Payment success landing page
/// - `GET /cancel` - Payment canceled landing page
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/success", get(success))
        .route("/cancel", get(cancel))
}
