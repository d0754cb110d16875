//! Stripe webhook signature verification.
//!
//! Implements verification of Stripe webhook signatures using HMAC-SHA256,
//! with timestamp validation to prevent replay attacks.

use secrecy::{ExposeSecret, SecretString};

use super::errors::{VerificationError, WebhookError};
use super::event::{VerifiedEvent, WebhookEnvelope};
use super::signature::{compute_signature, SignatureHeader};

/// Default maximum age for webhook events (5 minutes).
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

/// Maximum allowed clock skew for future events (1 minute).
pub const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Verifier for Stripe webhook signatures.
pub struct StripeWebhookVerifier {
    /// The endpoint signing secret (whsec_...).
    secret: SecretString,
    /// Maximum accepted age of a signed timestamp.
    tolerance_secs: i64,
    /// Reject test mode events.
    require_livemode: bool,
}

impl StripeWebhookVerifier {
    /// Creates a verifier with the default tolerance window.
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
            require_livemode: false,
        }
    }

    /// Overrides the tolerance window.
    pub fn with_tolerance(mut self, tolerance_secs: i64) -> Self {
        self.tolerance_secs = tolerance_secs;
        self
    }

    /// Require livemode events.
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }

    pub fn tolerance_secs(&self) -> i64 {
        self.tolerance_secs
    }

    /// Verifies an envelope, collapsing every failure into `VerificationError`.
    ///
    /// The specific cause is logged and never returned.
    pub fn verify(&self, envelope: &WebhookEnvelope) -> Result<VerifiedEvent, VerificationError> {
        self.verify_at(envelope, chrono::Utc::now().timestamp())
    }

    /// `verify` as of the Unix time `now`.
    pub fn verify_at(
        &self,
        envelope: &WebhookEnvelope,
        now: i64,
    ) -> Result<VerifiedEvent, VerificationError> {
        self.verify_and_parse_at(&envelope.payload, &envelope.signature, now)
            .map_err(|cause| {
                tracing::warn!(
                    error = %cause,
                    payload_len = envelope.payload.len(),
                    "Webhook verification failed"
                );
                VerificationError
            })
    }

    /// Verifies the webhook signature against the current time and parses the event.
    pub fn verify_and_parse(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<VerifiedEvent, WebhookError> {
        self.verify_and_parse_at(payload, signature_header, chrono::Utc::now().timestamp())
    }

    /// Verifies the webhook signature as of `now` and parses the event.
    ///
    /// # Verification Steps
    ///
    /// 1. Parse the signature header
    /// 2. Compute expected signature over the raw bytes
    /// 3. Compare against every `v1` candidate in constant time
    /// 4. Validate timestamp is within the tolerance window
    /// 5. Parse the JSON payload
    ///
    /// # Errors
    ///
    /// - `MalformedHeader` - Header could not be parsed
    /// - `InvalidSignature` - No candidate matched
    /// - `TimestampOutOfRange` - Event is older than the tolerance
    /// - `InvalidTimestamp` - Event timestamp is in the future
    /// - `ParseError` - Payload is not an event
    /// - `TestModeRejected` - Test event while livemode is required
    pub fn verify_and_parse_at(
        &self,
        payload: &[u8],
        signature_header: &str,
        now: i64,
    ) -> Result<VerifiedEvent, WebhookError> {
        let header = SignatureHeader::parse(signature_header)?;

        let expected =
            compute_signature(self.secret.expose_secret().as_bytes(), header.timestamp, payload)?;
        if !header.matches(&expected) {
            return Err(WebhookError::InvalidSignature);
        }

        self.validate_timestamp(header.timestamp, now)?;

        let event = VerifiedEvent::from_slice(payload)?;

        if self.require_livemode && !event.livemode {
            return Err(WebhookError::TestModeRejected);
        }

        Ok(event)
    }

    /// Validates that the timestamp is within acceptable bounds.
    fn validate_timestamp(&self, timestamp: i64, now: i64) -> Result<(), WebhookError> {
        let age = now.saturating_sub(timestamp);

        if age > self.tolerance_secs {
            return Err(WebhookError::TimestampOutOfRange);
        }

        if age < -MAX_CLOCK_SKEW_SECS {
            return Err(WebhookError::InvalidTimestamp);
        }

        Ok(())
    }
}

impl std::fmt::Debug for StripeWebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeWebhookVerifier")
            .field("secret", &"[REDACTED]")
            .field("tolerance_secs", &self.tolerance_secs)
            .field("require_livemode", &self.require_livemode)
            .finish()
    }
}
