//! Hosted checkout session requests.

mod request;

pub use request::{CheckoutMode, CheckoutSessionRequest, LineItem};
