//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port against the Stripe Checkout API.
//!
//! # Security
//!
//! The secret key is held in a `secrecy::SecretString` and only exposed when
//! building the basic-auth header.

mod api_types;
mod checkout_client;
mod mock_payment_provider;

pub use api_types::{StripeErrorBody, StripeErrorResponse};
pub use checkout_client::{StripeCheckoutClient, STRIPE_API_BASE_URL};
pub use mock_payment_provider::MockPaymentProvider;
