//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes, handlers and middleware
//! - `stripe` - Stripe Checkout API client

pub mod http;
pub mod stripe;

pub use http::{app_router, with_middleware, AppState};
pub use stripe::{MockPaymentProvider, StripeCheckoutClient};
