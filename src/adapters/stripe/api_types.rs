//! Stripe API wire types.

use serde::Deserialize;

/// Error envelope returned by the Stripe API on non-2xx responses.
///
/// ```json
/// {"error": {"type": "invalid_request_error", "code": "resource_missing", "message": "No such price: 'price_x'"}}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    pub error: StripeErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl StripeErrorResponse {
    /// Parses an error body, returning `None` if it is not Stripe's envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
