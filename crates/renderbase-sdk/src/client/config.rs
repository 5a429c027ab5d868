//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::auth::ApiKey;
use crate::error::{Error, Result};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.renderbase.dev/api/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "RENDERBASE_API_KEY";

/// Default request timeout for API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for fetching a generated document.
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "RENDERBASE_BASE_URL";

/// Configuration for the Renderbase client.
#[derive(Debug, Clone)]
pub struct RenderbaseConfig {
    /// API key sent as a bearer credential.
    pub api_key: ApiKey,

    /// Base URL of the Renderbase API.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Total timeout for document downloads, which replaces `timeout` there.
    pub download_timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl RenderbaseConfig {
    /// Creates a configuration for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: Duration::from_secs(10),
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
            user_agent: crate::USER_AGENT.to_string(),
        })
    }

    /// Loads the configuration from `RENDERBASE_API_KEY` and, if set,
    /// `RENDERBASE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::config(format!("{API_KEY_ENV} is not set")))?;

        let config = Self::new(api_key)?;
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => Ok(config.with_base_url(base_url)),
            _ => Ok(config),
        }
    }

    /// Sets the base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the total timeout for document downloads.
    #[must_use]
    pub fn with_download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    /// Sets the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {e}", self.base_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Unsupported base URL scheme '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }

    /// Builds the full URL for an API path and its query pairs.
    ///
    /// Each path segment is percent-encoded on its own, so `/`, `?` and `#`
    /// inside an identifier stay part of that segment. Empty, `.` and `..`
    /// segments are rejected. Pairs are appended in order and URL-encoded.
    pub fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::config(format!("Invalid path segment '{bad}'")));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| Error::config(format!("Base URL '{}' cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}
