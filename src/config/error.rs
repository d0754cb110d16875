//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid Stripe API key format")]
    InvalidStripeKey,

    #[error("Invalid Stripe publishable key format")]
    InvalidStripePublishableKey,

    #[error("Invalid Stripe webhook secret format")]
    InvalidStripeWebhookSecret,

    #[error("Invalid URL for {0}")]
    InvalidUrl(&'static str),

    #[error("Checkout quantity must be at least 1")]
    InvalidQuantity,

    #[error("Webhook tolerance must be positive")]
    InvalidTolerance,

    #[error("Invalid webhook event type: {0:?}")]
    InvalidEventType(String),
}

/// True for absolute `http://` or `https://` URLs with a host part.
pub(crate) fn is_http_url(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .strip_prefix(scheme)
            .map(|rest| !rest.is_empty() && !rest.starts_with('/'))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_detection() {
        assert!(is_http_url("http://localhost:3000/success"));
        assert!(is_http_url("https://api.stripe.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("/success"));
    }

    #[test]
    fn validation_error_messages() {
        assert_eq!(
            ValidationError::MissingRequired("CHECKOUT__PRICE_ID").to_string(),
            "Required configuration missing: CHECKOUT__PRICE_ID"
        );
        assert_eq!(
            ValidationError::InvalidEventType("a b".to_string()).to_string(),
            "Invalid webhook event type: \"a b\""
        );
    }
}
