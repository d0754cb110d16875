//! Ports - Interfaces for external dependencies.
//!
//! Adapters implement these ports; the application layer depends only on
//! the traits.

mod payment_provider;

pub use payment_provider::{CheckoutSession, PaymentError, PaymentErrorCode, PaymentProvider};
