//! Checkout handlers.

mod create_checkout_session;

pub use create_checkout_session::{CreateCheckoutSessionCommand, CreateCheckoutSessionHandler};
