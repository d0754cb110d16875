//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured sessions
//! - Error injection
//! - Request tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::checkout::CheckoutSessionRequest;
use crate::ports::{CheckoutSession, PaymentError, PaymentProvider};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
/// mock.set_error(PaymentError::invalid_request("No such price"));
/// let result = mock.create_checkout_session(&request).await;
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Session body to return instead of the default.
    next_session: Option<serde_json::Value>,

    /// Error returned by every call while set.
    error: Option<PaymentError>,

    /// Requests received, in order.
    requests: Vec<CheckoutSessionRequest>,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with `error`.
    pub fn failing(error: PaymentError) -> Self {
        let mock = Self::new();
        mock.set_error(error);
        mock
    }

    /// Set the session body returned by subsequent calls.
    pub fn set_session(&self, raw: serde_json::Value) {
        self.inner.lock().unwrap().next_session = Some(raw);
    }

    /// Make subsequent calls fail with `error`.
    pub fn set_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().error = Some(error);
    }

    pub fn clear_error(&self) {
        self.inner.lock().unwrap().error = None;
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CheckoutSessionRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    fn default_session(call: usize) -> serde_json::Value {
        let id = format!("cs_test_mock_{}", call);
        json!({
            "id": id,
            "object": "checkout.session",
            "mode": "payment",
            "status": "open",
            "url": format!("https://checkout.stripe.com/c/pay/{}", id),
        })
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let raw = {
            let mut state = self.inner.lock().unwrap();
            state.requests.push(request.clone());

            if let Some(error) = &state.error {
                return Err(error.clone());
            }

            state
                .next_session
                .clone()
                .unwrap_or_else(|| Self::default_session(state.requests.len()))
        };

        CheckoutSession::from_raw(raw)
    }
}
