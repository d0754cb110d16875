//! Webhook configuration

use serde::Deserialize;

use crate::domain::webhook::{EventType, DEFAULT_TOLERANCE_SECS};

use super::error::ValidationError;

/// Webhook verification and routing settings
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Maximum accepted age of a signed timestamp, in seconds
    #[serde(default = "default_tolerance")]
    pub tolerance_secs: i64,

    /// Event types bound to the recording handler (comma-separated)
    pub observed_events: Option<String>,
}

impl WebhookConfig {
    /// Get observed event types, falling back to the recognized set
    pub fn observed_event_list(&self) -> Vec<String> {
        match &self.observed_events {
            Some(events) => events
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => EventType::RECOGNIZED
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        }
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tolerance_secs <= 0 {
            return Err(ValidationError::InvalidTolerance);
        }
        for event_type in self.observed_event_list() {
            if event_type.chars().any(char::is_whitespace) {
                return Err(ValidationError::InvalidEventType(event_type));
            }
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: default_tolerance(),
            observed_events: None,
        }
    }
}

fn default_tolerance() -> i64 {
    DEFAULT_TOLERANCE_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebhookConfig::default();
        assert_eq!(config.tolerance_secs, 300);
        assert_eq!(
            config.observed_event_list(),
            vec![
                "checkout.session.completed".to_string(),
                "customer.subscription.updated".to_string(),
                "customer.subscription.deleted".to_string(),
            ]
        );
    }

    #[test]
    fn test_observed_events_parsing() {
        let config = WebhookConfig {
            observed_events: Some("invoice.paid , checkout.session.completed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.observed_event_list(),
            vec![
                "invoice.paid".to_string(),
                "checkout.session.completed".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_observed_events_disables_recording() {
        let config = WebhookConfig {
            observed_events: Some(String::new()),
            ..Default::default()
        };
        assert!(config.observed_event_list().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_tolerance() {
        let config = WebhookConfig {
            tolerance_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTolerance));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(WebhookConfig::default().validate().is_ok());
    }
}
