//! Data models for the Renderbase SDK.
//!
//! This module contains all request and response types used by the SDK.

mod common;
mod documents;
mod templates;
mod webhooks;

pub use common::*;
pub use documents::*;
pub use templates::*;
pub use webhooks::*;
