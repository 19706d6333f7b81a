//! Request and response types for hybrid search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::{DocumentFilter, PatentDocument};

/// A hybrid search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; must be non-empty after trimming.
    pub query: String,
    /// Optional structural filters.
    #[serde(default)]
    pub filters: Option<SearchFilters>,
    /// 1-based page number; defaults to 1.
    #[serde(default)]
    pub page: Option<usize>,
    /// Page size; defaults to the engine's configured page size.
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl SearchRequest {
    /// Create a request for a bare query.
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            filters: None,
            page: None,
            page_size: None,
        }
    }

    /// Set the structural filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the page (1-based).
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Raw structural filters as they arrive from a caller.
///
/// Dates are ISO strings parsed leniently: an unparseable value is treated
/// as an absent filter rather than failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// CPC classification codes.
    #[serde(default)]
    pub cpc_codes: Vec<String>,
    /// IPC classification codes.
    #[serde(default)]
    pub ipc_codes: Vec<String>,
    /// Assignee substring.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Inclusive ISO lower bound on the filing date (`YYYY-MM-DD`).
    #[serde(default)]
    pub filed_after: Option<String>,
    /// Inclusive ISO upper bound on the filing date (`YYYY-MM-DD`).
    #[serde(default)]
    pub filed_before: Option<String>,
}

impl SearchFilters {
    /// Resolve raw filter values into a [`DocumentFilter`].
    pub fn resolve(&self) -> DocumentFilter {
        DocumentFilter {
            cpc_codes: self.cpc_codes.clone(),
            ipc_codes: self.ipc_codes.clone(),
            assignee: self
                .assignee
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            filed_after: self.filed_after.as_deref().and_then(parse_date),
            filed_before: self.filed_before.as_deref().and_then(parse_date),
        }
    }
}

/// Lenient ISO date parsing; malformed values become `None`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Per-field highlighted HTML fragments for one result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldHighlights {
    /// Highlighted title fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Highlighted abstract fragment.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Highlighted claims fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<String>,
    /// Highlighted classification-code fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<String>,
}

/// A single ranked search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    /// The matched document.
    pub document: PatentDocument,
    /// Per-field highlighted excerpts.
    pub highlights: FieldHighlights,
    /// Lexical score in [0, 1].
    pub lexical_score: f32,
    /// Semantic score in [0, 1].
    pub semantic_score: f32,
    /// Blended score used for ranking.
    pub score: f32,
}

/// A page of ranked search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Name of the embedding provider that served this search.
    pub provider: String,
    /// Total number of scored candidates before pagination.
    pub total: usize,
    /// 1-based page number of this slice.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// The ranked slice for this page.
    pub results: Vec<ScoredResult>,
}
