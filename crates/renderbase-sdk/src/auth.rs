//! API key credential.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// A Renderbase API key.
///
/// The key is held as a secret and only exposed when the `Authorization`
/// header is built.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Creates an API key, rejecting empty or whitespace-only values.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::config("API key is required"));
        }
        Ok(Self {
            key: SecretString::new(key),
        })
    }

    /// Applies the key as a bearer credential.
    pub(crate) fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.key.expose_secret())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
