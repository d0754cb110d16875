//! Response bodies shared by the HTTP endpoints.

use serde::{Deserialize, Serialize};

/// Standard error response for API errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attach details to the response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_omits_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new("PROCESSOR_ERROR", "boom")).unwrap();
        assert_eq!(body, json!({"error_code": "PROCESSOR_ERROR", "message": "boom"}));
    }

    #[test]
    fn error_response_includes_details() {
        let body = serde_json::to_value(
            ErrorResponse::new("PROCESSOR_ERROR", "boom")
                .with_details(json!({"provider_code": "resource_missing"})),
        )
        .unwrap();
        assert_eq!(body["details"]["provider_code"], "resource_missing");
    }

    #[test]
    fn health_response_serializes_status() {
        let body = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }
}
