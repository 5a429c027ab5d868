//! HTTP transport for the Renderbase API.

use bytes::Bytes;
use reqwest::{header, Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{ApiErrorBody, Error, Result};

use super::config::RenderbaseConfig;

/// Internal HTTP client shared by all services.
pub struct HttpClient {
    client: Client,
    config: RenderbaseConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(config: &RenderbaseConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Makes a GET request. `path` lists the segments below the base URL.
    #[instrument(skip(self, path), fields(path = %path.join("/")))]
    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        self.request(Method::GET, path, &[], Option::<&()>::None).await
    }

    /// Makes a GET request with query parameters.
    #[instrument(skip(self, path, query), fields(path = %path.join("/")))]
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, path, query, Option::<&()>::None).await
    }

    /// Makes a POST request with a JSON body.
    #[instrument(skip(self, path, body), fields(path = %path.join("/")))]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &[&str],
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a DELETE request. Any success body is discarded.
    #[instrument(skip(self, path), fields(path = %path.join("/")))]
    pub async fn delete(&self, path: &[&str]) -> Result<()> {
        self.send(Method::DELETE, path, &[], Option::<&()>::None).await?;
        Ok(())
    }

    /// Fetches raw bytes from a pre-signed URL.
    ///
    /// The API key is not attached. The whole transfer is bounded by
    /// `download_timeout` instead of the API request timeout. Every failure
    /// maps to [`Error::Download`].
    #[instrument(skip_all)]
    pub async fn download(&self, url: &str) -> Result<Bytes> {
        let url = Url::parse(url)
            .map_err(|e| Error::download(format!("Invalid download URL: {e}")))?;
        debug!(host = url.host_str().unwrap_or_default(), "Downloading document");

        let response = self
            .client
            .get(url)
            .timeout(self.config.download_timeout)
            .send()
            .await
            .map_err(|e| Error::Download {
                message: "Request to download URL failed".to_string(),
                source: Some(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Download URL returned an error status");
            return Err(Error::download(format!("HTTP {status}")));
        }

        response.bytes().await.map_err(|e| Error::Download {
            message: "Failed to read document body".to_string(),
            source: Some(e),
        })
    }

    /// Makes a request and deserializes the JSON response.
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T> {
        let response = self.send(method, path, query, body).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            debug!("Failed to parse response: {}", String::from_utf8_lossy(&bytes));
            Error::Serialization(e)
        })
    }

    /// Sends one authenticated request and checks its status.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.config.url(path, query)?;
        let mut request = self.client.request(method.clone(), url);

        request = self.config.api_key.authenticate(request);
        request = request.header(header::ACCEPT, "application/json");

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(method = %method, status = %status, "Request succeeded");
            return Ok(response);
        }

        warn!(method = %method, status = %status, "Request failed");
        Err(Self::response_to_error(response).await)
    }

    /// Converts an error response to an Error.
    async fn response_to_error(response: Response) -> Error {
        let status = response.status();
        match response.bytes().await {
            Ok(bytes) => Self::error_from_body(status, &bytes),
            Err(_) => Self::generic_error(status),
        }
    }

    /// Builds an API error from a response body, falling back to the status.
    fn error_from_body(status: StatusCode, body: &[u8]) -> Error {
        serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.into_error(status.as_u16()))
            .unwrap_or_else(|| Self::generic_error(status))
    }

    fn generic_error(status: StatusCode) -> Error {
        Error::api(status.as_u16(), None, format!("HTTP {status}"))
    }
}

impl Clone for HttpClient {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
