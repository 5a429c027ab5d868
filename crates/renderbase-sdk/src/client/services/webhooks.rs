//! Webhooks service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{ListResponse, Pagination, QueryParams, Webhook, WebhookCreate};

use super::super::http::HttpClient;

/// Service for managing webhook subscriptions.
#[derive(Clone)]
pub struct WebhooksService {
    http: Arc<HttpClient>,
}

impl WebhooksService {
    /// Creates a new webhooks service.
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a new webhook.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use renderbase_sdk::{RenderbaseClient, WebhookCreate, WebhookEvent};
    /// # async fn example(client: RenderbaseClient) -> Result<(), renderbase_sdk::Error> {
    /// let request = WebhookCreate::new(
    ///     "https://api.example.com/hooks/renderbase",
    ///     vec![WebhookEvent::DocumentCompleted, WebhookEvent::DocumentFailed],
    /// )
    /// .with_description("Invoice pipeline");
    ///
    /// let webhook = client.webhooks().create(&request).await?;
    /// println!("Created webhook: {}", webhook.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: &WebhookCreate) -> Result<Webhook> {
        self.http.post(&["webhooks"], request).await
    }

    /// Lists webhooks.
    pub async fn list(&self) -> Result<ListResponse<Webhook>> {
        self.http.get(&["webhooks"]).await
    }

    /// Lists webhooks with pagination.
    pub async fn list_with_pagination(&self, pagination: &Pagination) -> Result<ListResponse<Webhook>> {
        self.http
            .get_with_query(&["webhooks"], &pagination.to_query())
            .await
    }

    /// Gets a webhook by ID.
    pub async fn get(&self, id: impl AsRef<str>) -> Result<Webhook> {
        self.http.get(&["webhooks", id.as_ref()]).await
    }

    /// Deletes a webhook.
    pub async fn delete(&self, id: impl AsRef<str>) -> Result<()> {
        self.http.delete(&["webhooks", id.as_ref()]).await
    }
}

impl std::fmt::Debug for WebhooksService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhooksService").finish_non_exhaustive()
    }
}
