//! Checkout Relay - Stripe Checkout and webhook relay
//!
//! Serves a checkout page, creates hosted checkout sessions for a configured
//! price, and accepts signed Stripe webhooks, verifying each delivery before
//! routing it by event type.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
