//! Webhook models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Unique identifier.
    pub id: String,

    /// Endpoint that receives deliveries.
    pub url: String,

    /// Events the webhook is subscribed to.
    pub events: Vec<WebhookEvent>,

    /// Whether deliveries are enabled.
    #[serde(default = "default_active")]
    pub active: bool,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Signing secret. Only returned when the webhook is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// When the webhook was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Webhook event types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebhookEvent {
    /// A document finished rendering.
    DocumentCompleted,
    /// A document failed to render.
    DocumentFailed,
    /// A generation job was queued.
    DocumentQueued,
    /// An event this SDK version does not know.
    Other(String),
}

impl WebhookEvent {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DocumentCompleted => "document.completed",
            Self::DocumentFailed => "document.failed",
            Self::DocumentQueued => "document.queued",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for WebhookEvent {
    fn from(s: String) -> Self {
        match s.as_str() {
            "document.completed" => Self::DocumentCompleted,
            "document.failed" => Self::DocumentFailed,
            "document.queued" => Self::DocumentQueued,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for WebhookEvent {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<WebhookEvent> for String {
    fn from(event: WebhookEvent) -> Self {
        match event {
            WebhookEvent::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to create a webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreate {
    /// Endpoint that receives deliveries.
    pub url: String,

    /// Events to subscribe to.
    pub events: Vec<WebhookEvent>,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WebhookCreate {
    /// Creates a new webhook request.
    #[must_use]
    pub fn new(url: impl Into<String>, events: Vec<WebhookEvent>) -> Self {
        Self {
            url: url.into(),
            events,
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
