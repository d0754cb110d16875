//! Checkout configuration

use serde::Deserialize;

use crate::domain::checkout::{CheckoutMode, CheckoutSessionRequest, LineItem};

use super::error::{is_http_url, ValidationError};

/// The fixed line item sold by `/checkout` and its redirect targets.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Stripe price reference (price_...)
    #[serde(default)]
    pub price_id: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub mode: CheckoutMode,

    /// Payment method types (comma-separated)
    #[serde(default = "default_payment_method_types")]
    pub payment_method_types: String,

    #[serde(default = "default_success_url")]
    pub success_url: String,

    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,
}

impl CheckoutConfig {
    /// Get payment method types as a vector
    pub fn payment_method_type_list(&self) -> Vec<String> {
        self.payment_method_types
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds the request sent for every `/checkout` call.
    pub fn to_session_request(&self) -> CheckoutSessionRequest {
        CheckoutSessionRequest::single(
            LineItem::new(self.price_id.clone(), self.quantity),
            self.mode,
            self.success_url.clone(),
            self.cancel_url.clone(),
        )
        .with_payment_method_types(self.payment_method_type_list())
    }

    /// Validate checkout configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.price_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("CHECKOUT__PRICE_ID"));
        }
        if self.quantity == 0 {
            return Err(ValidationError::InvalidQuantity);
        }
        if self.payment_method_type_list().is_empty() {
            return Err(ValidationError::MissingRequired(
                "CHECKOUT__PAYMENT_METHOD_TYPES",
            ));
        }
        if !is_http_url(&self.success_url) {
            return Err(ValidationError::InvalidUrl("CHECKOUT__SUCCESS_URL"));
        }
        if !is_http_url(&self.cancel_url) {
            return Err(ValidationError::InvalidUrl("CHECKOUT__CANCEL_URL"));
        }
        Ok(())
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            price_id: String::new(),
            quantity: default_quantity(),
            mode: CheckoutMode::default(),
            payment_method_types: default_payment_method_types(),
            success_url: default_success_url(),
            cancel_url: default_cancel_url(),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

fn default_payment_method_types() -> String {
    "card".to_string()
}

fn default_success_url() -> String {
    "http://localhost:3000/success".to_string()
}

fn default_cancel_url() -> String {
    "http://localhost:3000/cancel".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_price() -> CheckoutConfig {
        CheckoutConfig {
            price_id: "price_123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::default();
        assert_eq!(config.quantity, 1);
        assert_eq!(config.mode, CheckoutMode::Payment);
        assert_eq!(config.success_url, "http://localhost:3000/success");
        assert_eq!(config.cancel_url, "http://localhost:3000/cancel");
    }

    #[test]
    fn test_to_session_request() {
        let request = with_price().to_session_request();

        assert_eq!(request.line_items, vec![LineItem::new("price_123", 1)]);
        assert_eq!(request.mode, CheckoutMode::Payment);
        assert_eq!(request.payment_method_types, vec!["card".to_string()]);
        assert_eq!(request.cancel_url, "http://localhost:3000/cancel");
    }

    #[test]
    fn test_payment_method_types_parsing() {
        let config = CheckoutConfig {
            payment_method_types: "card, link,".to_string(),
            ..with_price()
        };
        assert_eq!(
            config.payment_method_type_list(),
            vec!["card".to_string(), "link".to_string()]
        );
    }

    #[test]
    fn test_validation_missing_price() {
        assert_eq!(
            CheckoutConfig::default().validate(),
            Err(ValidationError::MissingRequired("CHECKOUT__PRICE_ID"))
        );
    }

    #[test]
    fn test_validation_zero_quantity() {
        let config = CheckoutConfig {
            quantity: 0,
            ..with_price()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn test_validation_relative_redirect() {
        let config = CheckoutConfig {
            success_url: "/success".to_string(),
            ..with_price()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("CHECKOUT__SUCCESS_URL"))
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(with_price().validate().is_ok());
    }
}
