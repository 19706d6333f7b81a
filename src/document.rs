//! Patent document model and the document store seam.
//!
//! The ranking pipeline never owns document storage: candidates are fetched
//! through the [`DocumentStore`] trait, which applies structural filters
//! (classification codes, assignee substring, filing-date range) and returns
//! up to a caller-supplied number of documents ordered by recency. The
//! bundled [`MemoryDocumentStore`] backs the CLI and tests; production
//! deployments plug in their own store behind the same trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A patent document as seen by the search pipeline.
///
/// Identity (`id`) is immutable; content fields are whatever the backing
/// store currently holds for that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentDocument {
    /// Primary key of the document in the backing store.
    pub id: String,
    /// Patent title.
    pub title: String,
    /// Abstract text.
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    /// Claims text.
    #[serde(default)]
    pub claims: String,
    /// CPC classification codes.
    #[serde(default)]
    pub cpc_codes: Vec<String>,
    /// IPC classification codes.
    #[serde(default)]
    pub ipc_codes: Vec<String>,
    /// Assignee name.
    #[serde(default)]
    pub assignee: String,
    /// Filing date, if known.
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    /// Publication date, if known.
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
}

impl PatentDocument {
    /// Create a document with the given id and title; remaining fields empty.
    pub fn new<S: Into<String>, T: Into<String>>(id: S, title: T) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            abstract_text: String::new(),
            claims: String::new(),
            cpc_codes: Vec::new(),
            ipc_codes: Vec::new(),
            assignee: String::new(),
            filing_date: None,
            publication_date: None,
        }
    }

    /// Both classification code lists joined into one display string.
    pub fn classification_text(&self) -> String {
        self.cpc_codes
            .iter()
            .chain(self.ipc_codes.iter())
            .cloned()
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// The composite text that is embedded and lexically scored: title,
    /// abstract, claims, and classification codes joined with spaces.
    pub fn composite_text(&self) -> String {
        let classifications = self.classification_text();
        [
            self.title.as_str(),
            self.abstract_text.as_str(),
            self.claims.as_str(),
            classifications.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(" ")
    }

    /// Recency key used for candidate ordering: publication date, falling
    /// back to the filing date.
    pub fn recency(&self) -> Option<NaiveDate> {
        self.publication_date.or(self.filing_date)
    }
}

/// Resolved structural filter applied by a document store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    /// CPC codes; a document matches when it shares at least one.
    pub cpc_codes: Vec<String>,
    /// IPC codes; a document matches when it shares at least one.
    pub ipc_codes: Vec<String>,
    /// Case-insensitive assignee substring.
    pub assignee: Option<String>,
    /// Inclusive lower bound on the filing date.
    pub filed_after: Option<NaiveDate>,
    /// Inclusive upper bound on the filing date.
    pub filed_before: Option<NaiveDate>,
}

impl DocumentFilter {
    /// Check whether a document passes this filter.
    pub fn matches(&self, document: &PatentDocument) -> bool {
        if !code_list_matches(&self.cpc_codes, &document.cpc_codes) {
            return false;
        }
        if !code_list_matches(&self.ipc_codes, &document.ipc_codes) {
            return false;
        }

        if let Some(ref needle) = self.assignee {
            let needle = needle.to_lowercase();
            if !document.assignee.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if self.filed_after.is_some() || self.filed_before.is_some() {
            // Documents without a filing date cannot satisfy a date bound.
            let Some(filed) = document.filing_date else {
                return false;
            };
            if let Some(after) = self.filed_after
                && filed < after
            {
                return false;
            }
            if let Some(before) = self.filed_before
                && filed > before
            {
                return false;
            }
        }

        true
    }
}

/// An empty code filter matches everything; otherwise the document must
/// share at least one code, compared case-insensitively.
fn code_list_matches(wanted: &[String], present: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    wanted
        .iter()
        .any(|code| present.iter().any(|p| p.eq_ignore_ascii_case(code)))
}

/// Trait for document stores queryable by structural filters.
///
/// Implementations return at most `limit` documents ordered by recency
/// (most recent first). The ranking pipeline treats the store as a black
/// box and never persists anything back into it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch candidate documents matching the filter, capped at `limit`.
    async fn fetch_candidates(
        &self,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<PatentDocument>>;
}

/// In-memory document store.
///
/// Backs the CLI (corpus loaded from a JSON file) and tests. Interior
/// mutability lets documents be added after the store is shared with an
/// engine.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<Vec<PatentDocument>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single document.
    pub fn add_document(&self, document: PatentDocument) {
        self.documents.write().push(document);
    }

    /// Add a batch of documents.
    pub fn add_documents(&self, documents: Vec<PatentDocument>) {
        self.documents.write().extend(documents);
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn fetch_candidates(
        &self,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<PatentDocument>> {
        let documents = self.documents.read();
        let mut candidates: Vec<PatentDocument> = documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect();
        drop(documents);

        // Most recent first; documents without any date sort last.
        candidates.sort_by(|a, b| b.recency().cmp(&a.recency()));
        candidates.truncate(limit);
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_doc() -> PatentDocument {
        PatentDocument {
            id: "US-001".to_string(),
            title: "Wireless charging coil".to_string(),
            abstract_text: "A coil for inductive power transfer.".to_string(),
            claims: "1. A charging coil comprising...".to_string(),
            cpc_codes: vec!["H02J50/10".to_string()],
            ipc_codes: vec!["H02J7/00".to_string()],
            assignee: "Acme Power Corp".to_string(),
            filing_date: Some(date("2021-03-15")),
            publication_date: Some(date("2022-09-01")),
        }
    }

    #[test]
    fn test_composite_text_contains_all_fields() {
        let doc = sample_doc();
        let text = doc.composite_text();
        assert!(text.contains("Wireless charging coil"));
        assert!(text.contains("inductive power transfer"));
        assert!(text.contains("comprising"));
        assert!(text.contains("H02J50/10"));
        assert!(text.contains("H02J7/00"));
    }

    #[test]
    fn test_composite_text_skips_empty_fields() {
        let doc = PatentDocument::new("US-002", "Rotor blade");
        assert_eq!(doc.composite_text(), "Rotor blade");
    }

    #[test]
    fn test_filter_code_overlap() {
        let doc = sample_doc();

        let mut filter = DocumentFilter {
            cpc_codes: vec!["h02j50/10".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&doc));

        filter.cpc_codes = vec!["B60L53/12".to_string()];
        assert!(!filter.matches(&doc));
    }

    #[test]
    fn test_filter_assignee_substring() {
        let doc = sample_doc();

        let filter = DocumentFilter {
            assignee: Some("acme".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&doc));

        let filter = DocumentFilter {
            assignee: Some("globex".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&doc));
    }

    #[test]
    fn test_filter_date_range() {
        let doc = sample_doc();

        let filter = DocumentFilter {
            filed_after: Some(date("2021-01-01")),
            filed_before: Some(date("2021-12-31")),
            ..Default::default()
        };
        assert!(filter.matches(&doc));

        let filter = DocumentFilter {
            filed_after: Some(date("2022-01-01")),
            ..Default::default()
        };
        assert!(!filter.matches(&doc));
    }

    #[test]
    fn test_filter_date_range_requires_filing_date() {
        let doc = PatentDocument::new("US-003", "Undated");
        let filter = DocumentFilter {
            filed_before: Some(date("2030-01-01")),
            ..Default::default()
        };
        assert!(!filter.matches(&doc));
    }

    #[tokio::test]
    async fn test_memory_store_recency_order_and_cap() {
        let store = MemoryDocumentStore::new();

        let mut old = sample_doc();
        old.id = "US-OLD".to_string();
        old.publication_date = Some(date("2010-01-01"));

        let mut new = sample_doc();
        new.id = "US-NEW".to_string();
        new.publication_date = Some(date("2024-06-01"));

        let mut undated = PatentDocument::new("US-UNDATED", "No dates");

        undated.cpc_codes = vec!["H02J50/10".to_string()];
        store.add_documents(vec![old, undated, new]);
        assert_eq!(store.len(), 3);

        let all = store
            .fetch_candidates(&DocumentFilter::default(), 10)
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "US-NEW");
        assert_eq!(all[1].id, "US-OLD");
        assert_eq!(all[2].id, "US-UNDATED");

        let capped = store
            .fetch_candidates(&DocumentFilter::default(), 2)
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].id, "US-NEW");
    }

    #[tokio::test]
    async fn test_memory_store_applies_filter() {
        let store = MemoryDocumentStore::new();
        store.add_document(sample_doc());

        let filter = DocumentFilter {
            assignee: Some("globex".to_string()),
            ..Default::default()
        };
        let hits = store.fetch_candidates(&filter, 10).await.unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_document_json_round_trip_field_names() {
        let json = r#"{
            "id": "US-010",
            "title": "Heat pump",
            "abstract": "A heat pump system.",
            "claims": "1. A pump.",
            "cpc_codes": ["F25B30/02"],
            "assignee": "Thermo Inc",
            "filing_date": "2020-05-04"
        }"#;
        let doc: PatentDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.abstract_text, "A heat pump system.");
        assert_eq!(doc.filing_date, Some(date("2020-05-04")));
        assert!(doc.ipc_codes.is_empty());
        assert!(doc.publication_date.is_none());
    }
}
