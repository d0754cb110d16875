//! Event dispatch by type tag.
//!
//! Handlers are registered against event-type strings. Dispatching an event
//! whose tag has no handler is an acknowledged no-op, so Stripe stops
//! redelivering events this service intentionally ignores.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::errors::{DispatchError, HandlerError};
use super::event::VerifiedEvent;

/// Handler for a verified webhook event.
///
/// Implementations should be stateless with respect to the dispatcher and
/// focus on a single event type.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &VerifiedEvent) -> Result<(), HandlerError>;
}

/// Result of dispatching a verified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A registered handler processed the event.
    Handled { event_type: String },
    /// No handler is registered for the tag; acknowledged without action.
    Ignored { event_type: String },
}

impl DispatchOutcome {
    pub fn event_type(&self) -> &str {
        match self {
            Self::Handled { event_type } | Self::Ignored { event_type } => event_type,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }
}

/// Lookup table from event-type tag to handler.
#[derive(Clone, Default)]
pub struct EventHandlerRegistry {
    handlers: HashMap<String, Arc<dyn EventHandler>>,
}

impl EventHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: bind `handler` to `event_type`.
    pub fn register(mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) -> Self {
        self.insert(event_type, handler);
        self
    }

    /// Binds `handler` to `event_type`, returning any handler it replaced.
    pub fn insert(
        &mut self,
        event_type: impl Into<String>,
        handler: Arc<dyn EventHandler>,
    ) -> Option<Arc<dyn EventHandler>> {
        self.handlers.insert(event_type.into(), handler)
    }

    /// Binds every tag in `event_types` to the same handler.
    pub fn register_all<I, S>(mut self, event_types: I, handler: Arc<dyn EventHandler>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for event_type in event_types {
            self.insert(event_type, handler.clone());
        }
        self
    }

    pub fn is_registered(&self, event_type: &str) -> bool {
        self.handlers.contains_key(event_type)
    }

    /// Registered tags in sorted order.
    pub fn event_types(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Routes `event` to the handler registered for its tag.
    ///
    /// Never fails for an unknown tag.
    pub async fn dispatch(&self, event: &VerifiedEvent) -> Result<DispatchOutcome, DispatchError> {
        let Some(handler) = self.handlers.get(&event.event_type) else {
            return Ok(DispatchOutcome::Ignored {
                event_type: event.event_type.clone(),
            });
        };

        handler.handle(event).await.map_err(|source| {
            tracing::error!(
                event_id = %event.id,
                event_type = %event.event_type,
                error = %source,
                "Webhook event handler failed"
            );
            DispatchError::Handler {
                event_type: event.event_type.clone(),
                source,
            }
        })?;

        Ok(DispatchOutcome::Handled {
            event_type: event.event_type.clone(),
        })
    }
}

impl std::fmt::Debug for EventHandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandlerRegistry")
            .field("event_types", &self.event_types())
            .finish()
    }
}
