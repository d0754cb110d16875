//! HTTP handlers for checkout endpoints.

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::CreateCheckoutSessionCommand;

/// POST /checkout - Create a hosted checkout session for the configured item
///
/// Responds with the processor's session object unchanged.
pub async fn create_checkout(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let cmd = CreateCheckoutSessionCommand {
        request: (*state.checkout_request).clone(),
    };

    let session = state.checkout_handler().handle(cmd).await?;

    Ok(Json(session.raw))
}
