//! Stripe Checkout client.
//!
//! Creates hosted checkout sessions through the Stripe REST API. Requests are
//! form encoded and authenticated with the secret key as the basic-auth user.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::domain::checkout::CheckoutSessionRequest;
use crate::ports::{CheckoutSession, PaymentError, PaymentErrorCode, PaymentProvider};

use super::api_types::StripeErrorResponse;

/// Default Stripe API origin.
pub const STRIPE_API_BASE_URL: &str = "https://api.stripe.com";

/// `PaymentProvider` backed by the Stripe API.
pub struct StripeCheckoutClient {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API.
    api_base_url: String,

    http_client: reqwest::Client,
}

impl StripeCheckoutClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_base_url: STRIPE_API_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(config.stripe_secret_key.clone()).with_base_url(config.api_base_url.clone())
    }

    fn sessions_url(&self) -> String {
        format!("{}/v1/checkout/sessions", self.api_base_url)
    }
}

impl std::fmt::Debug for StripeCheckoutClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeCheckoutClient")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Flattens a request into Stripe's bracketed form encoding.
fn form_params(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut params = vec![("mode".to_string(), request.mode.as_str().to_string())];

    for (i, method) in request.payment_method_types.iter().enumerate() {
        params.push((format!("payment_method_types[{}]", i), method.clone()));
    }
    for (i, item) in request.line_items.iter().enumerate() {
        params.push((format!("line_items[{}][price]", i), item.price_id.clone()));
        params.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    params.push(("success_url".to_string(), request.success_url.clone()));
    params.push(("cancel_url".to_string(), request.cancel_url.clone()));
    params
}

/// Maps a non-2xx Stripe response to a `PaymentError`.
///
/// The message is Stripe's own when the body carries one, otherwise the raw body.
fn error_from_response(status: reqwest::StatusCode, body: &str) -> PaymentError {
    let code = match status.as_u16() {
        401 | 403 => PaymentErrorCode::AuthenticationError,
        429 => PaymentErrorCode::RateLimitExceeded,
        400 | 402 | 404 => PaymentErrorCode::InvalidRequest,
        _ => PaymentErrorCode::ProviderError,
    };

    match StripeErrorResponse::parse(body) {
        Some(parsed) => {
            let message = parsed
                .error
                .message
                .unwrap_or_else(|| format!("Stripe API error ({})", status));
            let err = PaymentError::new(code, message);
            match parsed.error.code {
                Some(provider_code) => err.with_provider_code(provider_code),
                None => err,
            }
        }
        None if body.trim().is_empty() => {
            PaymentError::new(code, format!("Stripe API error ({})", status))
        }
        None => PaymentError::new(code, body.trim()),
    }
}

#[async_trait]
impl PaymentProvider for StripeCheckoutClient {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let response = self
            .http_client
            .post(self.sessions_url())
            .basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
            .form(&form_params(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Stripe request failed");
                PaymentError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = error_from_response(status, &body);
            tracing::warn!(
                status = status.as_u16(),
                code = %err.code,
                provider_code = ?err.provider_code,
                "Stripe rejected checkout session"
            );
            return Err(err);
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        let session = CheckoutSession::from_raw(raw)?;
        tracing::info!(session_id = %session.id, "Checkout session created");
        Ok(session)
    }
}
