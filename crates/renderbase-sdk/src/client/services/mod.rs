//! API service implementations.

mod documents;
mod templates;
mod webhooks;

pub use documents::DocumentsService;
pub use templates::TemplatesService;
pub use webhooks::WebhooksService;
