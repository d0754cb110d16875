//! HTTP adapter for checkout session creation.

mod handlers;
mod routes;

pub use routes::checkout_routes;
