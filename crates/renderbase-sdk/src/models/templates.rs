//! Template models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{push_opt, QueryParams};
use super::documents::{DocumentFormat, DocumentKind};

/// A server-stored document template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique identifier.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Kind of document the template renders.
    #[serde(rename = "type")]
    pub template_type: DocumentKind,

    /// Declared variables, in template order.
    #[serde(default)]
    pub variables: Vec<TemplateVariable>,

    /// Short ID (e.g. `tmpl_abc123`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,

    /// URL-friendly slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the template was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the template was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Returns the declared variable with the given name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&TemplateVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Returns the names of variables that must be supplied.
    pub fn required_variables(&self) -> impl Iterator<Item = &str> {
        self.variables
            .iter()
            .filter(|v| v.required)
            .map(|v| v.name.as_str())
    }
}

/// A variable declared by a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    /// Variable name.
    pub name: String,

    /// Declared type (e.g. `string`, `number`, `array`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,

    /// Whether the variable must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Default value.
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters for listing templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateListParams {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Items per page.
    pub limit: Option<u32>,
    /// Only templates of this type.
    pub template_type: Option<DocumentFormat>,
}

impl TemplateListParams {
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

    /// Filters by template type.
    #[must_use]
    pub fn with_type(mut self, template_type: DocumentFormat) -> Self {
        self.template_type = Some(template_type);
        self
    }
}

impl QueryParams for TemplateListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "page", self.page);
        push_opt(&mut query, "limit", self.limit);
        push_opt(&mut query, "type", self.template_type);
        query
    }
}
