//! Mapping from application errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::application::HandleWebhookError;
use crate::domain::webhook::{DispatchError, VerificationError};
use crate::ports::PaymentError;

use super::dto::ErrorResponse;

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Webhook request without a signature header.
    MissingSignature,
    /// Webhook failed verification.
    Verification(VerificationError),
    /// A registered event handler failed.
    Dispatch(DispatchError),
    /// The payment processor rejected or failed the call.
    Processor(PaymentError),
}

impl From<VerificationError> for ApiError {
    fn from(err: VerificationError) -> Self {
        Self::Verification(err)
    }
}

impl From<HandleWebhookError> for ApiError {
    fn from(err: HandleWebhookError) -> Self {
        match err {
            HandleWebhookError::Verification(e) => Self::Verification(e),
            HandleWebhookError::Dispatch(e) => Self::Dispatch(e),
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self::Processor(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Webhook rejections carry no detail.
            ApiError::MissingSignature | ApiError::Verification(_) => {
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::Dispatch(_) => {
                let error = ErrorResponse::new("HANDLER_ERROR", "Webhook event handling failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
            ApiError::Processor(err) => {
                let mut error = ErrorResponse::new("PROCESSOR_ERROR", err.message);
                if let Some(provider_code) = err.provider_code {
                    error = error.with_details(json!({ "provider_code": provider_code }));
                }
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}
