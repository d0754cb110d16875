//! Default handler: records the event and acknowledges it.

use async_trait::async_trait;

use super::dispatcher::EventHandler;
use super::errors::HandlerError;
use super::event::VerifiedEvent;

/// Logs routing fields for every event it receives.
///
/// The full payload is only emitted at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingHandler;

impl RecordingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    async fn handle(&self, event: &VerifiedEvent) -> Result<(), HandlerError> {
        tracing::info!(
            event_id = %event.id,
            event_type = %event.event_type,
            recognized = event.parsed_type().is_recognized(),
            object_id = event.object_id().unwrap_or("-"),
            livemode = event.livemode,
            "Webhook event received"
        );
        tracing::debug!(
            event_id = %event.id,
            object = %event.data.object,
            "Webhook event payload"
        );
        Ok(())
    }
}
