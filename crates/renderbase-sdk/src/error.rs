//! Error types for the Renderbase SDK.
//!
//! Every operation returns [`Result<T>`]. The variants separate failures that
//! never reached the network (configuration), failures reported by the API
//! (non-2xx responses), failures of the connection itself, and failures while
//! fetching a pre-signed download URL.

use serde::Deserialize;

/// The main error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client configuration is invalid (missing API key, bad base URL).
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code, when the body carried one.
        code: Option<String>,
        /// Human-readable message.
        message: String,
    },

    /// Network or connection error on an API call.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Fetching a generated document from its download URL failed.
    #[error("Download failed: {message}")]
    Download {
        /// Error message.
        message: String,
        /// Underlying HTTP failure, if any.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// IO error while writing a downloaded document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an API error.
    pub fn api(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code,
            message: message.into(),
        }
    }

    /// Creates a download error without an underlying HTTP failure.
    pub fn download(message: impl Into<String>) -> Self {
        Self::Download {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the HTTP status code for API errors.
    ///
    /// `None` means the failure did not come from an HTTP response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the remote error code, if the API supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns true for a 404 from the API.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns true for a 401 or 403 from the API.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }

    /// Returns true if retrying the same call could succeed.
    ///
    /// The SDK never retries on its own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl ApiErrorBody {
    /// Converts a parsed error body into an SDK error.
    ///
    /// Returns `None` when the body carries no usable message.
    pub(crate) fn into_error(self, status: u16) -> Option<Error> {
        let message = self.message.or(self.error)?;
        Some(Error::api(status, self.code, message))
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
