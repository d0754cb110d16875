//! CreateCheckoutSessionHandler - Command handler for starting a hosted checkout.

use std::sync::Arc;

use crate::domain::checkout::CheckoutSessionRequest;
use crate::ports::{CheckoutSession, PaymentError, PaymentProvider};

/// Command to create a checkout session.
#[derive(Debug, Clone)]
pub struct CreateCheckoutSessionCommand {
    pub request: CheckoutSessionRequest,
}

/// Handler for creating checkout sessions.
///
/// Forwards the request to the payment provider once. Nothing is stored
/// locally, so a failure leaves no state behind.
pub struct CreateCheckoutSessionHandler {
    payment_provider: Arc<dyn PaymentProvider>,
}

impl CreateCheckoutSessionHandler {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>) -> Self {
        Self { payment_provider }
    }

    pub async fn handle(
        &self,
        cmd: CreateCheckoutSessionCommand,
    ) -> Result<CheckoutSession, PaymentError> {
        self.payment_provider
            .create_checkout_session(&cmd.request)
            .await
            .map_err(|e| {
                tracing::error!(
                    code = %e.code,
                    retryable = e.retryable,
                    "Checkout session creation failed"
                );
                e
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::domain::checkout::{CheckoutMode, LineItem};
    use crate::ports::PaymentErrorCode;

    fn command() -> CreateCheckoutSessionCommand {
        CreateCheckoutSessionCommand {
            request: CheckoutSessionRequest::single(
                LineItem::new("price_123", 1),
                CheckoutMode::Payment,
                "http://localhost:3000/success",
                "http://localhost:3000/cancel",
            ),
        }
    }

    #[tokio::test]
    async fn returns_session_from_provider() {
        let provider = Arc::new(MockPaymentProvider::new());
        let handler = CreateCheckoutSessionHandler::new(provider.clone());

        let session = handler.handle(command()).await.unwrap();

        assert!(!session.id.is_empty());
        assert_eq!(provider.requests(), vec![command().request]);
    }

    #[tokio::test]
    async fn propagates_provider_error_without_retry() {
        let provider = Arc::new(MockPaymentProvider::failing(PaymentError::invalid_request(
            "No such price: 'price_123'",
        )));
        let handler = CreateCheckoutSessionHandler::new(provider.clone());

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::InvalidRequest);
        assert_eq!(err.message, "No such price: 'price_123'");
        assert_eq!(provider.call_count(), 1);
    }
}
