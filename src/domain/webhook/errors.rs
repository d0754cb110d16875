//! Webhook error types.
//!
//! `WebhookError` carries the precise reason a delivery was rejected and is
//! only ever logged. Callers outside the verifier see the opaque
//! `VerificationError`, so the HTTP response cannot be used as an oracle.

use thiserror::Error;

/// Internal cause of a webhook verification failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// The signature header could not be parsed.
    #[error("Malformed signature header: {0}")]
    MalformedHeader(&'static str),

    /// No candidate digest matched the recomputed HMAC.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signed timestamp is older than the tolerance window.
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Signed timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Verified payload is not a well-formed event.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Test mode event received while live mode is required.
    #[error("Test mode event rejected")]
    TestModeRejected,
}

/// Public, cause-free verification failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Webhook verification failed")]
pub struct VerificationError;

impl From<WebhookError> for VerificationError {
    fn from(_: WebhookError) -> Self {
        VerificationError
    }
}

/// Error returned by a registered event handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Failure while dispatching a verified event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The handler registered for the event type failed.
    #[error("Handler for {event_type} failed: {source}")]
    Handler {
        event_type: String,
        source: HandlerError,
    },
}
