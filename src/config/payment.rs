//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::{is_http_url, ValidationError};

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key (sk_...)
    pub stripe_secret_key: SecretString,

    /// Stripe publishable key (pk_...), embedded in the checkout page
    pub stripe_publishable_key: SecretString,

    /// Stripe webhook signing secret (whsec_...)
    pub stripe_webhook_secret: SecretString,

    /// Stripe API origin
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Reject test mode webhook events
    #[serde(default)]
    pub require_livemode: bool,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_secret_key.expose_secret().starts_with("sk_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret_key = self.stripe_secret_key.expose_secret();
        let publishable_key = self.stripe_publishable_key.expose_secret();
        let webhook_secret = self.stripe_webhook_secret.expose_secret();

        if secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__STRIPE_SECRET_KEY"));
        }
        if publishable_key.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT__STRIPE_PUBLISHABLE_KEY",
            ));
        }
        if webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PAYMENT__STRIPE_WEBHOOK_SECRET",
            ));
        }

        // Verify key prefixes for safety
        if !secret_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !publishable_key.starts_with("pk_") {
            return Err(ValidationError::InvalidStripePublishableKey);
        }
        if !webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidUrl("PAYMENT__API_BASE_URL"));
        }

        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.stripe.com".to_string()
}
