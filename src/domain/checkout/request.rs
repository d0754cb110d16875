//! Checkout session request value types.

use serde::{Deserialize, Serialize};

/// What the hosted checkout page collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// One-off payment.
    #[default]
    Payment,
    /// Recurring subscription.
    Subscription,
    /// Save payment details for later.
    Setup,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Subscription => "subscription",
            Self::Setup => "setup",
        }
    }
}

impl std::fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A price reference and how many units of it to sell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub price_id: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(price_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            price_id: price_id.into(),
            quantity,
        }
    }
}

/// Parameters for creating a hosted checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSessionRequest {
    pub line_items: Vec<LineItem>,
    pub mode: CheckoutMode,
    pub payment_method_types: Vec<String>,
    /// Where the customer lands after paying.
    pub success_url: String,
    /// Where the customer lands after abandoning checkout.
    pub cancel_url: String,
}

impl CheckoutSessionRequest {
    /// Card-only request for a single line item.
    pub fn single(
        item: LineItem,
        mode: CheckoutMode,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            line_items: vec![item],
            mode,
            payment_method_types: vec!["card".to_string()],
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    pub fn with_payment_method_types(mut self, types: Vec<String>) -> Self {
        self.payment_method_types = types;
        self
    }
}
