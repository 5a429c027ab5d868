//! Templates service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{ListResponse, QueryParams, Template, TemplateListParams};

use super::super::http::HttpClient;

/// Service for listing and retrieving templates.
#[derive(Clone)]
pub struct TemplatesService {
    http: Arc<HttpClient>,
}

impl TemplatesService {
    /// Creates a new templates service.
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists templates.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use renderbase_sdk::RenderbaseClient;
    /// # async fn example(client: RenderbaseClient) -> Result<(), renderbase_sdk::Error> {
    /// let templates = client.templates().list().await?;
    ///
    /// for template in templates.data {
    ///     println!("{}: {} ({} variables)",
    ///         template.id, template.name, template.variables.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self) -> Result<ListResponse<Template>> {
        self.http.get(&["templates"]).await
    }

    /// Lists templates with pagination and a type filter.
    pub async fn list_with_params(
        &self,
        params: &TemplateListParams,
    ) -> Result<ListResponse<Template>> {
        self.http.get_with_query(&["templates"], &params.to_query()).await
    }

    /// Gets a template by UUID, short ID or slug.
    ///
    /// The server resolves all three forms; the SDK passes the value through.
    pub async fn get(&self, template_id: impl AsRef<str>) -> Result<Template> {
        self.http.get(&["templates", template_id.as_ref()]).await
    }

    /// Gets a template by short ID (e.g. `tmpl_abc123`).
    pub async fn get_by_short_id(&self, short_id: impl AsRef<str>) -> Result<Template> {
        self.get(short_id).await
    }

    /// Gets a template by slug (e.g. `invoice-template`).
    pub async fn get_by_slug(&self, slug: impl AsRef<str>) -> Result<Template> {
        self.get(slug).await
    }
}

impl std::fmt::Debug for TemplatesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplatesService").finish_non_exhaustive()
    }
}
