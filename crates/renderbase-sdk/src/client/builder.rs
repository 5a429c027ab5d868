//! Client builder for fluent configuration.

use std::time::Duration;

use crate::error::{Error, Result};

use super::config::RenderbaseConfig;
use super::RenderbaseClient;

/// Builder for creating a [`RenderbaseClient`].
///
/// # Example
///
/// ```rust,no_run
/// use renderbase_sdk::RenderbaseClient;
/// use std::time::Duration;
///
/// let client = RenderbaseClient::builder()
///     .api_key("sk_live_xxxxx")
///     .base_url("https://api.renderbase.dev/api/v1")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok::<(), renderbase_sdk::Error>(())
/// ```
#[derive(Default)]
pub struct RenderbaseClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    download_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RenderbaseClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    ///
    /// This is required and must be called before [`build()`](Self::build).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the base URL of the Renderbase API.
    ///
    /// Default: `https://api.renderbase.dev/api/v1`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    ///
    /// Default: 30 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub fn timeout_secs(self, secs: u64) -> Self {
        self.timeout(Duration::from_secs(secs))
    }

    /// Sets the connection timeout.
    ///
    /// Default: 10 seconds.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the total timeout for document downloads.
    ///
    /// Downloads do not use the request timeout. Default: 300 seconds.
    #[must_use]
    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = Some(timeout);
        self
    }

    /// Sets the user agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or empty, or if the base
    /// URL is not a valid http(s) URL.
    pub fn build(self) -> Result<RenderbaseClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::config("API key is required"))?;

        let mut config = RenderbaseConfig::new(api_key)?;

        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }

        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        if let Some(timeout) = self.connect_timeout {
            config = config.with_connect_timeout(timeout);
        }

        if let Some(timeout) = self.download_timeout {
            config = config.with_download_timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        RenderbaseClient::from_config(config)
    }
}

impl std::fmt::Debug for RenderbaseClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderbaseClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
