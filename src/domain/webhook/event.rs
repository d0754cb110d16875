//! Webhook envelope and verified event types.
//!
//! Only fields relevant to routing are captured; everything specific to the
//! event type stays in `data.object` as opaque JSON.

use serde::{Deserialize, Serialize};

use super::errors::WebhookError;

/// Raw webhook delivery as received on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEnvelope {
    /// Exact request body bytes.
    pub payload: Vec<u8>,
    /// Value of the Stripe-Signature header.
    pub signature: String,
}

impl WebhookEnvelope {
    pub fn new(payload: impl Into<Vec<u8>>, signature: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            signature: signature.into(),
        }
    }
}

/// Stripe event that passed signature and freshness checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifiedEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Event type tag (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: EventData,

    /// Whether this is a live mode event.
    #[serde(default)]
    pub livemode: bool,

    /// API version used to render this event.
    #[serde(default)]
    pub api_version: Option<String>,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventData {
    /// The object that triggered the event (polymorphic on event type).
    pub object: serde_json::Value,

    /// Previous values for updated attributes (update events only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<serde_json::Value>,
}

impl VerifiedEvent {
    /// Parses an event from verified payload bytes.
    pub fn from_slice(payload: &[u8]) -> Result<Self, WebhookError> {
        serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    /// Parse the event type into a known enum variant.
    pub fn parsed_type(&self) -> EventType {
        EventType::from(self.event_type.as_str())
    }

    /// Identifier of the nested object, if it carries one.
    pub fn object_id(&self) -> Option<&str> {
        self.data.object.get("id").and_then(|id| id.as_str())
    }

    /// Attempts to deserialize the data object as the specified type.
    ///
    /// Lets custom `EventHandler`s work with typed Stripe objects instead of
    /// raw JSON.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Stripe event types recognized out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Checkout session completed successfully.
    CheckoutSessionCompleted,
    /// Customer subscription was updated.
    CustomerSubscriptionUpdated,
    /// Customer subscription was deleted.
    CustomerSubscriptionDeleted,
    /// Anything else.
    Unknown,
}

impl EventType {
    /// Tags bound to the recording handler when none are configured.
    pub const RECOGNIZED: [EventType; 3] = [
        EventType::CheckoutSessionCompleted,
        EventType::CustomerSubscriptionUpdated,
        EventType::CustomerSubscriptionDeleted,
    ];

    /// Convert to the Stripe event type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckoutSessionCompleted => "checkout.session.completed",
            Self::CustomerSubscriptionUpdated => "customer.subscription.updated",
            Self::CustomerSubscriptionDeleted => "customer.subscription.deleted",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this tag is one of the recognized lifecycle events.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            "customer.subscription.updated" => Self::CustomerSubscriptionUpdated,
            "customer.subscription.deleted" => Self::CustomerSubscriptionDeleted,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for creating test VerifiedEvent instances.
#[cfg(test)]
pub struct VerifiedEventBuilder {
    id: String,
    event_type: String,
    created: i64,
    object: serde_json::Value,
    livemode: bool,
}

#[cfg(test)]
impl Default for VerifiedEventBuilder {
    fn default() -> Self {
        Self {
            id: "evt_test_123".to_string(),
            event_type: "checkout.session.completed".to_string(),
            created: chrono::Utc::now().timestamp(),
            object: serde_json::json!({}),
            livemode: false,
        }
    }
}

#[cfg(test)]
impl VerifiedEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn object(mut self, object: serde_json::Value) -> Self {
        self.object = object;
        self
    }

    pub fn livemode(mut self, livemode: bool) -> Self {
        self.livemode = livemode;
        self
    }

    pub fn build(self) -> VerifiedEvent {
        VerifiedEvent {
            id: self.id,
            event_type: self.event_type,
            created: self.created,
            data: EventData {
                object: self.object,
                previous_attributes: None,
            },
            livemode: self.livemode,
            api_version: Some("2025-02-24.acacia".to_string()),
        }
    }
}
