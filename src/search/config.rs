//! Configuration for the hybrid search pipeline.

use std::time::Duration;

use crate::embedding::EmbeddingConfig;
use crate::highlight::HighlightConfig;

/// Configuration for hybrid search blending lexical and semantic scores.
#[derive(Debug, Clone)]
pub struct HybridSearchConfig {
    /// Weight for the semantic (cosine similarity) component.
    pub semantic_weight: f32,
    /// Weight for the lexical (term frequency) component.
    pub lexical_weight: f32,
    /// Cap on the candidate set fetched from the document store, bounding
    /// per-request embedding cost.
    pub max_candidates: usize,
    /// Page size used when a request does not specify one.
    pub default_page_size: usize,
    /// Wall-clock budget for one search call, including all fan-out
    /// embedding work.
    pub request_timeout: Duration,
    /// Embedding provider configuration.
    pub embedding: EmbeddingConfig,
    /// Snippet highlighting configuration.
    pub highlight: HighlightConfig,
}

impl Default for HybridSearchConfig {
    fn default() -> Self {
        Self {
            semantic_weight: 0.6,
            lexical_weight: 0.4,
            max_candidates: 100,
            default_page_size: 10,
            request_timeout: Duration::from_secs(15),
            embedding: EmbeddingConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl HybridSearchConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedding configuration.
    pub fn with_embedding(mut self, embedding: EmbeddingConfig) -> Self {
        self.embedding = embedding;
        self
    }

    /// Set the candidate cap.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let config = HybridSearchConfig::default();
        assert_eq!(config.semantic_weight, 0.6);
        assert_eq!(config.lexical_weight, 0.4);
        assert_eq!(config.max_candidates, 100);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_builder_methods() {
        let config = HybridSearchConfig::new()
            .with_max_candidates(25)
            .with_request_timeout(Duration::from_secs(2));
        assert_eq!(config.max_candidates, 25);
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }
}
