//! Renderbase API client implementation.
//!
//! This module provides the main client for interacting with the Renderbase API.

mod builder;
mod config;
mod http;
mod services;

pub use builder::RenderbaseClientBuilder;
pub use config::{
    RenderbaseConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_DOWNLOAD_TIMEOUT,
    DEFAULT_TIMEOUT,
};
pub use services::{DocumentsService, TemplatesService, WebhooksService};

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;

use self::http::HttpClient;

/// The main client for interacting with the Renderbase API.
///
/// Cloning is cheap; clones share one HTTP connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use renderbase_sdk::{DocumentFormat, GenerateRequest, RenderbaseClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), renderbase_sdk::Error> {
///     let client = RenderbaseClient::new("your-api-key")?;
///
///     let request = GenerateRequest::new("tmpl_invoice", DocumentFormat::Pdf)
///         .variable("invoiceNumber", "INV-001");
///     let result = client.documents().generate(&request).await?;
///
///     if let Some(url) = result.ready_download_url() {
///         let pdf = client.documents().download(url).await?;
///         println!("Downloaded {} bytes", pdf.len());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct RenderbaseClient {
    http: Arc<HttpClient>,
    config: Arc<RenderbaseConfig>,
}

impl RenderbaseClient {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(RenderbaseConfig::new(api_key)?)
    }

    /// Creates a client with a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(RenderbaseConfig::new(api_key)?.with_base_url(base_url))
    }

    /// Creates a client from `RENDERBASE_API_KEY` and `RENDERBASE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(RenderbaseConfig::from_env()?)
    }

    /// Creates a client from configuration.
    pub fn from_config(config: RenderbaseConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::new(&config)?;
        debug!(base_url = %config.base_url, "Created Renderbase client");

        Ok(Self {
            http: Arc::new(http),
            config: Arc::new(config),
        })
    }

    /// Creates a new client builder.
    #[must_use]
    pub fn builder() -> RenderbaseClientBuilder {
        RenderbaseClientBuilder::new()
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &RenderbaseConfig {
        &self.config
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the documents service for generation and job management.
    #[must_use]
    pub fn documents(&self) -> DocumentsService {
        DocumentsService::new(Arc::clone(&self.http))
    }

    /// Returns the templates service.
    #[must_use]
    pub fn templates(&self) -> TemplatesService {
        TemplatesService::new(Arc::clone(&self.http))
    }

    /// Returns the webhooks service.
    #[must_use]
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(Arc::clone(&self.http))
    }
}

impl std::fmt::Debug for RenderbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderbaseClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
