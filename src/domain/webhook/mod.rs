//! Stripe webhook verification and event dispatch.
//!
//! A delivery is accepted only if its signature matches the configured
//! secret and its signed timestamp is within tolerance. Verified events are
//! routed by type tag; tags without a handler are acknowledged and ignored.

mod dispatcher;
mod errors;
mod event;
mod recording_handler;
mod signature;
mod verifier;

pub use dispatcher::{DispatchOutcome, EventHandler, EventHandlerRegistry};
pub use errors::{DispatchError, HandlerError, VerificationError, WebhookError};
pub use event::{EventData, EventType, VerifiedEvent, WebhookEnvelope};
pub use recording_handler::RecordingHandler;
pub use signature::{compute_signature, sign_payload, SignatureHeader, SIGNATURE_HEADER};
pub use verifier::{StripeWebhookVerifier, DEFAULT_TOLERANCE_SECS, MAX_CLOCK_SKEW_SECS};
