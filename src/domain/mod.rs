//! Domain layer.
//!
//! # Module Organization
//!
//! - `checkout` - Hosted checkout session requests
//! - `webhook` - Stripe webhook verification and event dispatch

pub mod checkout;
pub mod webhook;
