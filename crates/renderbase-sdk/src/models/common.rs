//! Common types used across the SDK.

use serde::{Deserialize, Serialize};

/// One page of a paginated list response.
///
/// `page` and `limit` are the values the server applied, which may differ
/// from the ones requested. Metadata the server leaves out reads as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items in this page.
    pub data: Vec<T>,

    /// Page number (1-based).
    #[serde(default)]
    pub page: u32,

    /// Page size.
    #[serde(default)]
    pub limit: u32,

    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
}

impl<T> ListResponse<T> {
    /// Returns the number of items in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if pages after this one exist.
    ///
    /// Always false when `page` or `limit` is missing.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page > 0 && self.limit > 0 && u64::from(self.page) * u64::from(self.limit) < self.total
    }

    /// Returns the number of pages at the current page size.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Pagination parameters for list operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-based).
    pub page: Option<u32>,

    /// Maximum number of items per page.
    pub limit: Option<u32>,
}

impl Pagination {
    /// Creates pagination for a page and page size.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Sets the page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl QueryParams for Pagination {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "page", self.page);
        push_opt(&mut query, "limit", self.limit);
        query
    }
}

/// Types that turn into URL query pairs.
///
/// Unset values are left out entirely; nothing is sent as an empty string.
pub trait QueryParams {
    /// Returns the query pairs in the order they are sent.
    fn to_query(&self) -> Vec<(&'static str, String)>;
}

/// Appends `key=value` when the value is set.
pub(crate) fn push_opt<V: ToString>(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<V>,
) {
    if let Some(v) = value {
        query.push((key, v.to_string()));
    }
}
