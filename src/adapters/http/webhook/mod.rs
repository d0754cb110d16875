//! HTTP adapter for inbound Stripe webhooks.

mod handlers;
mod routes;

pub use routes::webhook_routes;
