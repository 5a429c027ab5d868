//! # Renderbase SDK
//!
//! Rust SDK for the Renderbase API: generate PDF and Excel documents from
//! templates, browse templates and manage webhooks.
//!
//! ## Features
//!
//! - **Type-safe API client** - Fully typed request/response models
//! - **Async-first design** - Built on tokio and reqwest
//! - **One call, one request** - No hidden retries, polling or caching
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use renderbase_sdk::{DocumentFormat, GenerateRequest, RenderbaseClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), renderbase_sdk::Error> {
//!     let client = RenderbaseClient::new("your-api-key")?;
//!
//!     let request = GenerateRequest::new("tmpl_invoice", DocumentFormat::Pdf)
//!         .variable("invoiceNumber", "INV-001")
//!         .variable("customerName", "Acme Corp");
//!
//!     let result = client.documents().generate(&request).await?;
//!     println!("Job {} is {}", result.job_id, result.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust,no_run
//! # use renderbase_sdk::RenderbaseClient;
//! let client = RenderbaseClient::builder()
//!     .api_key("sk_live_xxxxx")
//!     .base_url("https://api.renderbase.dev/api/v1")
//!     .timeout_secs(60)
//!     .build()?;
//!
//! // Or from RENDERBASE_API_KEY / RENDERBASE_BASE_URL
//! let client = RenderbaseClient::from_env()?;
//! # Ok::<(), renderbase_sdk::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, renderbase_sdk::Error>`:
//!
//! ```rust,no_run
//! # use renderbase_sdk::RenderbaseClient;
//! # async fn example(client: RenderbaseClient) {
//! match client.documents().get("job_123").await {
//!     Ok(job) => println!("Status: {}", job.status),
//!     Err(e) if e.is_not_found() => println!("Job not found"),
//!     Err(renderbase_sdk::Error::Api { status, message, .. }) => {
//!         eprintln!("API error {status}: {message}");
//!     }
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export main types
pub use client::{
    DocumentsService, RenderbaseClient, RenderbaseClientBuilder, RenderbaseConfig,
    TemplatesService, WebhooksService, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL,
    DEFAULT_DOWNLOAD_TIMEOUT, DEFAULT_TIMEOUT,
};
pub use error::{Error, Result};

// Re-export model types for convenience
pub use models::{
    DocumentFormat, DocumentKind, DocumentListParams, GenerateRequest, GenerateResult, JobStatus,
    ListResponse, Pagination, Template, TemplateListParams, TemplateVariable, Webhook,
    WebhookCreate, WebhookEvent,
};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent string for API requests
pub const USER_AGENT: &str = concat!("renderbase-sdk-rust/", env!("CARGO_PKG_VERSION"));
