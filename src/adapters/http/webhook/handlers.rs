//! HTTP handlers for webhook endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::HandleWebhookCommand;
use crate::domain::webhook::{WebhookEnvelope, SIGNATURE_HEADER};

/// POST /webhook - Receive a Stripe event
///
/// The body is taken as raw bytes; it must reach the verifier unmodified.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!(payload_len = body.len(), "Webhook without signature header");
            ApiError::MissingSignature
        })?;

    let cmd = HandleWebhookCommand {
        envelope: WebhookEnvelope::new(body.to_vec(), signature),
    };

    state.webhook_handler().handle(cmd).await?;

    Ok("success")
}
