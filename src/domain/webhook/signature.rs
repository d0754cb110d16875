//! Stripe-Signature header parsing and HMAC-SHA256 signing.
//!
//! Header format: `t=<unix_ts>,v1=<hex_hmac>[,v1=<hex_hmac>...]`.
//! Several `v1` entries appear while a signing secret is being rolled.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Name of the signature header sent by Stripe.
pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// The only signature scheme that is checked. `v0` and unknown keys are ignored.
const SIGNATURE_SCHEME: &str = "v1";

/// Parsed components from the Stripe-Signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp when the signature was generated.
    pub timestamp: i64,
    /// Candidate `v1` digests, decoded from hex.
    pub signatures: Vec<Vec<u8>>,
}

impl SignatureHeader {
    /// Parses a Stripe-Signature header string.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MalformedHeader` if a part has no `=`, the
    /// timestamp is missing or not an integer, a `v1` value is not hex, or no
    /// `v1` value is present.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut signatures = Vec::new();

        for part in header.split(',') {
            let (key, value) = part
                .split_once('=')
                .ok_or(WebhookError::MalformedHeader("invalid header format"))?;

            match key.trim() {
                "t" => {
                    timestamp = Some(
                        value
                            .trim()
                            .parse()
                            .map_err(|_| WebhookError::MalformedHeader("invalid timestamp"))?,
                    );
                }
                SIGNATURE_SCHEME => {
                    let digest = hex::decode(value.trim())
                        .map_err(|_| WebhookError::MalformedHeader("invalid v1 signature hex"))?;
                    signatures.push(digest);
                }
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or(WebhookError::MalformedHeader("missing timestamp"))?;
        if signatures.is_empty() {
            return Err(WebhookError::MalformedHeader("missing v1 signature"));
        }

        Ok(Self {
            timestamp,
            signatures,
        })
    }

    /// Returns true if any candidate digest equals `expected`.
    pub fn matches(&self, expected: &[u8]) -> bool {
        self.signatures
            .iter()
            .any(|candidate| constant_time_compare(expected, candidate))
    }
}

/// Computes HMAC-SHA256 over `"{timestamp}." ++ payload`.
///
/// The payload is fed to the MAC as raw bytes; it is never decoded.
pub fn compute_signature(
    secret: &[u8],
    timestamp: i64,
    payload: &[u8],
) -> Result<Vec<u8>, WebhookError> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|_| WebhookError::InvalidSignature)?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Builds a complete `t=...,v1=...` header for `payload`.
///
/// Useful for replaying captured events against a local instance.
pub fn sign_payload(secret: &str, timestamp: i64, payload: &[u8]) -> Result<String, WebhookError> {
    let digest = compute_signature(secret.as_bytes(), timestamp, payload)?;
    Ok(format!("t={},v1={}", timestamp, hex::encode(digest)))
}

/// Constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
