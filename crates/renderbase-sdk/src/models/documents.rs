//! Document generation models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{push_opt, QueryParams};

/// Output format of a generated document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// PDF document.
    Pdf,
    /// Excel workbook.
    #[serde(alias = "xlsx")]
    Excel,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Excel => write!(f, "excel"),
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "excel" | "xlsx" => Ok(Self::Excel),
            _ => Err(format!("Unknown document format: {s}")),
        }
    }
}

/// Document kind reported by the service on jobs and templates.
///
/// Unlike [`DocumentFormat`], which is what a caller may request, this keeps
/// values the SDK does not recognise in [`DocumentKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
    /// PDF document.
    Pdf,
    /// Excel workbook.
    Excel,
    /// A kind this SDK version does not know.
    Other(String),
}

impl DocumentKind {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Other(s) => s,
        }
    }

    /// Returns the requestable format, if this kind has one.
    #[must_use]
    pub fn format(&self) -> Option<DocumentFormat> {
        match self {
            Self::Pdf => Some(DocumentFormat::Pdf),
            Self::Excel => Some(DocumentFormat::Excel),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for DocumentKind {
    fn from(s: String) -> Self {
        match s.parse::<DocumentFormat>() {
            Ok(format) => format.into(),
            Err(_) => Self::Other(s),
        }
    }
}

impl From<DocumentKind> for String {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl From<DocumentFormat> for DocumentKind {
    fn from(format: DocumentFormat) -> Self {
        match format {
            DocumentFormat::Pdf => Self::Pdf,
            DocumentFormat::Excel => Self::Excel,
        }
    }
}

impl PartialEq<DocumentFormat> for DocumentKind {
    fn eq(&self, other: &DocumentFormat) -> bool {
        self.format() == Some(*other)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a generation job.
///
/// The set of values belongs to the service; anything the SDK does not
/// recognise is kept verbatim in [`JobStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    /// Accepted, waiting for a worker.
    Queued,
    /// Being rendered.
    Processing,
    /// Rendered; the download URL is available.
    Completed,
    /// Rendering failed.
    Failed,
    /// A status this SDK version does not know.
    Other(String),
}

impl JobStatus {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "queued" | "pending" => Self::Queued,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to generate a document from a template.
///
/// # Example
///
/// ```
/// use renderbase_sdk::{DocumentFormat, GenerateRequest};
///
/// let request = GenerateRequest::new("tmpl_invoice", DocumentFormat::Pdf)
///     .variable("invoiceNumber", "INV-001")
///     .variable("total", 1250.5)
///     .with_workspace_id("ws_abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Template ID (UUID, short ID or slug).
    pub template_id: String,

    /// Output format.
    pub format: DocumentFormat,

    /// Template variables.
    pub variables: Map<String, Value>,

    /// Workspace to attach the job to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl GenerateRequest {
    /// Creates a request with no variables.
    #[must_use]
    pub fn new(template_id: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            template_id: template_id.into(),
            format,
            variables: Map::new(),
            workspace_id: None,
        }
    }

    /// Sets one variable, replacing an earlier value of the same name.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Replaces all variables.
    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    /// Sets the workspace.
    #[must_use]
    pub fn with_workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

/// A generation job and its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    /// Job identifier.
    pub job_id: String,

    /// Current status.
    pub status: JobStatus,

    /// Pre-signed download URL, present once the job completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// When the download URL stops working.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Output format.
    pub format: DocumentKind,

    /// Template the document was generated from.
    pub template_id: String,
}

impl GenerateResult {
    /// Returns true once the document is ready.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// Returns true if generation failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == JobStatus::Failed
    }

    /// Returns true while the job is queued or processing.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.status, JobStatus::Queued | JobStatus::Processing)
    }

    /// Returns the download URL only when the job completed.
    #[must_use]
    pub fn ready_download_url(&self) -> Option<&str> {
        if self.is_completed() {
            self.download_url.as_deref()
        } else {
            None
        }
    }
}

/// Filters for listing generation jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentListParams {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Items per page.
    pub limit: Option<u32>,
    /// Only jobs for this template.
    pub template_id: Option<String>,
    /// Only jobs in this workspace.
    pub workspace_id: Option<String>,
}

impl DocumentListParams {
    /// Creates empty list parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filters by template.
    #[must_use]
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Filters by workspace.
    #[must_use]
    pub fn with_workspace_id(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

impl QueryParams for DocumentListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "page", self.page);
        push_opt(&mut query, "limit", self.limit);
        push_opt(&mut query, "templateId", self.template_id.as_deref());
        push_opt(&mut query, "workspaceId", self.workspace_id.as_deref());
        query
    }
}
