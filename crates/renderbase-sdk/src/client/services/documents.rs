//! Documents service.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    DocumentListParams, GenerateRequest, GenerateResult, ListResponse, QueryParams,
};

use super::super::http::HttpClient;

/// Service for generating and managing documents.
#[derive(Clone)]
pub struct DocumentsService {
    http: Arc<HttpClient>,
}

impl DocumentsService {
    /// Creates a new documents service.
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Generates a document from a template.
    ///
    /// The returned job may already be completed or may still be queued,
    /// depending on the server. The SDK does not poll.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use renderbase_sdk::{RenderbaseClient, GenerateRequest, DocumentFormat};
    /// # async fn example(client: RenderbaseClient) -> Result<(), renderbase_sdk::Error> {
    /// let request = GenerateRequest::new("tmpl_invoice", DocumentFormat::Pdf)
    ///     .variable("invoiceNumber", "INV-001")
    ///     .variable("customerName", "Acme Corp");
    ///
    /// let result = client.documents().generate(&request).await?;
    /// println!("Job {} is {}", result.job_id, result.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResult> {
        self.http.post(&["documents", "generate"], request).await
    }

    /// Gets a generation job by ID.
    ///
    /// The ID is sent as a single path segment, percent-encoded as needed.
    pub async fn get(&self, job_id: impl AsRef<str>) -> Result<GenerateResult> {
        self.http.get(&["documents", "jobs", job_id.as_ref()]).await
    }

    /// Lists generation jobs.
    pub async fn list(&self) -> Result<ListResponse<GenerateResult>> {
        self.http.get(&["documents", "jobs"]).await
    }

    /// Lists generation jobs with pagination and filters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use renderbase_sdk::{RenderbaseClient, DocumentListParams};
    /// # async fn example(client: RenderbaseClient) -> Result<(), renderbase_sdk::Error> {
    /// let params = DocumentListParams::new()
    ///     .with_page(1)
    ///     .with_limit(20)
    ///     .with_template_id("tmpl_invoice");
    ///
    /// let jobs = client.documents().list_with_params(&params).await?;
    /// for job in &jobs.data {
    ///     println!("{}: {}", job.job_id, job.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_with_params(
        &self,
        params: &DocumentListParams,
    ) -> Result<ListResponse<GenerateResult>> {
        self.http
            .get_with_query(&["documents", "jobs"], &params.to_query())
            .await
    }

    /// Deletes a generated document.
    pub async fn delete(&self, job_id: impl AsRef<str>) -> Result<()> {
        self.http.delete(&["documents", "jobs", job_id.as_ref()]).await
    }

    /// Downloads a generated document from its pre-signed URL.
    ///
    /// The request goes straight to the URL without the API key and is
    /// bounded by [`RenderbaseConfig::download_timeout`](crate::RenderbaseConfig::download_timeout)
    /// rather than the API timeout. Failures surface as
    /// [`Error::Download`](crate::Error::Download).
    pub async fn download(&self, download_url: impl AsRef<str>) -> Result<Bytes> {
        self.http.download(download_url.as_ref()).await
    }

    /// Downloads a generated document and writes it to `path`.
    ///
    /// Returns the number of bytes written.
    pub async fn download_to_file(
        &self,
        download_url: impl AsRef<str>,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        let bytes = self.download(download_url).await?;
        tokio::fs::write(path.as_ref(), &bytes).await?;
        debug!(path = %path.as_ref().display(), size = bytes.len(), "Saved document");
        Ok(bytes.len())
    }
}

impl std::fmt::Debug for DocumentsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentsService").finish_non_exhaustive()
    }
}
