//! Hybrid search module blending lexical and semantic relevance.
//!
//! The ranking pipeline combines a token-overlap lexical score with
//! embedding cosine similarity:
//! - Precise substring matching for exact patent vocabulary
//! - Semantic closeness through embedding vectors
//! - Configurable weighting between the two signals

pub mod config;
pub mod engine;
pub mod types;

pub use config::HybridSearchConfig;
pub use engine::HybridSearchEngine;
pub use types::{FieldHighlights, ScoredResult, SearchFilters, SearchRequest, SearchResponse};
