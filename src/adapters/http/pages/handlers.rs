//! HTTP handlers for the static pages.

use axum::extract::State;
use axum::response::Html;

use crate::adapters::http::state::AppState;

/// GET / - Checkout page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_page.to_string())
}

/// GET /success - Stripe redirects here after payment
pub async fn success() -> &'static str {
    "Payment Succesful"
}

/// GET /cancel - Stripe redirects here when checkout is abandoned
pub async fn cancel() -> &'static str {
    "Payment Canceled!"
}
