//! Hybrid search engine orchestration.
//!
//! One search request flows through: query validation, tokenization,
//! candidate fetch (structural filters, capped), a single query embedding,
//! concurrent per-candidate embedding, score blending, a stable descending
//! sort, and pagination with per-field highlights. Candidates are
//! independent, so the embedding fan-out needs no coordination beyond
//! wait-for-all, and the whole call runs under a wall-clock budget.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use super::config::HybridSearchConfig;
use super::types::{FieldHighlights, ScoredResult, SearchRequest, SearchResponse};
use crate::analysis::tokenize;
use crate::document::{DocumentFilter, DocumentStore, PatentDocument};
use crate::embedding::{TextEmbedder, build_embedder};
use crate::error::{PatlexError, Result};
use crate::highlight::Highlighter;
use crate::scoring::{blend_scores, lexical_score};
use crate::vector::cosine_similarity;

/// Hybrid search engine over a document store.
///
/// The embedding provider is selected once at construction and shared
/// across all requests served by this instance.
pub struct HybridSearchEngine<S: DocumentStore> {
    config: HybridSearchConfig,
    store: S,
    embedder: Arc<dyn TextEmbedder>,
}

impl<S: DocumentStore> HybridSearchEngine<S> {
    /// Create an engine, selecting the embedding provider from the
    /// configuration.
    pub fn new(config: HybridSearchConfig, store: S) -> Result<Self> {
        let embedder = build_embedder(&config.embedding)?;
        Ok(Self {
            config,
            store,
            embedder,
        })
    }

    /// Create an engine with an explicit embedding provider.
    pub fn with_embedder(
        config: HybridSearchConfig,
        store: S,
        embedder: Arc<dyn TextEmbedder>,
    ) -> Self {
        Self {
            config,
            store,
            embedder,
        }
    }

    /// Name of the embedding provider serving this engine.
    pub fn provider(&self) -> &'static str {
        self.embedder.name()
    }

    /// Execute a search request under the configured time budget.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        match tokio::time::timeout(self.config.request_timeout, self.execute(request)).await {
            Ok(result) => result,
            Err(_) => Err(PatlexError::timeout(format!(
                "search exceeded {:?}",
                self.config.request_timeout
            ))),
        }
    }

    async fn execute(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(PatlexError::query("query is required"));
        }

        let tokens = tokenize(query);
        let filter = request
            .filters
            .as_ref()
            .map(|f| f.resolve())
            .unwrap_or_else(DocumentFilter::default);

        let candidates = self
            .store
            .fetch_candidates(&filter, self.config.max_candidates)
            .await?;
        let total = candidates.len();
        debug!(total, query, "fetched candidate set");

        // No meaningful ranking exists without a query vector, so a failure
        // here fails the whole search.
        let query_vector = self.embedder.embed(query).await?;

        let composites: Vec<String> = candidates
            .iter()
            .map(|doc| doc.composite_text())
            .collect();

        // Candidate embeddings are independent; fan out and wait for all.
        let embeddings = join_all(
            composites
                .iter()
                .map(|composite| self.embedder.embed(composite)),
        )
        .await;

        let mut scored: Vec<(PatentDocument, f32, f32, f32)> =
            Vec::with_capacity(candidates.len());
        for ((document, composite), embedding) in candidates
            .into_iter()
            .zip(composites.iter())
            .zip(embeddings)
        {
            let semantic = match embedding {
                Ok(vector) => {
                    cosine_similarity(&query_vector.data, &vector.data).clamp(0.0, 1.0)
                }
                Err(error) => {
                    // Isolated degradation: this candidate is ranked on its
                    // lexical score alone.
                    warn!(
                        document_id = %document.id,
                        %error,
                        "candidate embedding failed; using lexical score only"
                    );
                    0.0
                }
            };
            let lexical = lexical_score(composite, &tokens);
            let score = blend_scores(
                semantic,
                lexical,
                self.config.semantic_weight,
                self.config.lexical_weight,
            );
            scored.push((document, lexical, semantic, score));
        }

        // Stable sort: ties keep the store's retrieval (recency) order.
        scored.sort_by(|a, b| b.3.partial_cmp(&a.3).unwrap_or(std::cmp::Ordering::Equal));

        let page = request.page.unwrap_or(1).max(1);
        let page_size = request
            .page_size
            .unwrap_or(self.config.default_page_size)
            .max(1);
        let start = (page - 1) * page_size;

        let highlighter = Highlighter::new(self.config.highlight.clone(), &tokens)?;
        let results: Vec<ScoredResult> = scored
            .into_iter()
            .skip(start)
            .take(page_size)
            .map(|(document, lexical, semantic, score)| {
                let highlights = self.highlight_document(&highlighter, &document);
                ScoredResult {
                    document,
                    highlights,
                    lexical_score: lexical,
                    semantic_score: semantic,
                    score,
                }
            })
            .collect();

        Ok(SearchResponse {
            provider: self.embedder.name().to_string(),
            total,
            page,
            page_size,
            results,
        })
    }

    fn highlight_document(
        &self,
        highlighter: &Highlighter,
        document: &PatentDocument,
    ) -> FieldHighlights {
        let classifications = document.classification_text();
        FieldHighlights {
            title: non_empty(&document.title).map(|t| highlighter.title_snippet(t)),
            abstract_text: non_empty(&document.abstract_text)
                .map(|t| highlighter.body_snippet(t)),
            claims: non_empty(&document.claims).map(|t| highlighter.body_snippet(t)),
            classifications: non_empty(&classifications)
                .map(|t| highlighter.classification_snippet(t)),
        }
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.trim().is_empty() { None } else { Some(text) }
}
