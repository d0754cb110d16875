//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod checkout;
pub mod webhook;

pub use checkout::{CreateCheckoutSessionCommand, CreateCheckoutSessionHandler};
pub use webhook::{HandleWebhookCommand, HandleWebhookError, HandleWebhookHandler};
