//! Text embedding providers for the semantic half of hybrid search.
//!
//! Two providers are available behind the [`TextEmbedder`] trait: a remote
//! HTTP embedding API and a deterministic local hash fallback. Provider
//! selection is an explicit configuration decision made once per engine
//! instance via [`build_embedder`], never ambient global state.

pub mod cache;
pub mod hash_embedder;
pub mod remote_embedder;
pub mod text_embedder;

pub use cache::CachedEmbedder;
pub use hash_embedder::HashEmbedder;
pub use remote_embedder::RemoteEmbedder;
pub use text_embedder::TextEmbedder;

use std::env;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default remote embeddings endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/embeddings";
/// Default remote embedding model.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";
/// Dimensionality of the local hash fallback.
pub const HASH_DIMENSION: usize = 64;

/// Configuration for embedding generation.
///
/// Constructed explicitly and injected into the search engine, so the
/// ranking pipeline stays testable without environment mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// API key for the remote provider. When absent, the local hash
    /// fallback is used.
    pub api_key: Option<String>,
    /// Remote embeddings endpoint.
    pub api_url: String,
    /// Remote embedding model name.
    pub model: String,
    /// Dimensionality of the local hash fallback.
    pub dimension: usize,
    /// Cache embeddings keyed by content hash.
    pub cache: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            dimension: HASH_DIMENSION,
            cache: false,
        }
    }
}

impl EmbeddingConfig {
    /// Build a configuration from `PATLEX_EMBED_*` environment variables.
    ///
    /// `PATLEX_EMBED_API_KEY` selects the remote provider;
    /// `PATLEX_EMBED_API_URL` and `PATLEX_EMBED_MODEL` override the
    /// endpoint and model. Intended to be called once at startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = env::var("PATLEX_EMBED_API_KEY")
            && !key.trim().is_empty()
        {
            config.api_key = Some(key);
        }
        if let Ok(url) = env::var("PATLEX_EMBED_API_URL")
            && !url.trim().is_empty()
        {
            config.api_url = url;
        }
        if let Ok(model) = env::var("PATLEX_EMBED_MODEL")
            && !model.trim().is_empty()
        {
            config.model = model;
        }
        config
    }

    /// Whether the remote provider is configured.
    pub fn has_remote(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Build the embedding provider for a configuration.
///
/// Prefers the remote provider when an API key is configured, otherwise
/// falls back to the deterministic local hash embedder. Wraps the provider
/// in a content-hash cache when `cache` is set.
pub fn build_embedder(config: &EmbeddingConfig) -> Result<Arc<dyn TextEmbedder>> {
    let base: Arc<dyn TextEmbedder> = if config.has_remote() {
        let api_key = config.api_key.clone().unwrap_or_default();
        Arc::new(RemoteEmbedder::new(
            config.api_url.clone(),
            api_key,
            config.model.clone(),
        )?)
    } else {
        Arc::new(HashEmbedder::new(config.dimension))
    };

    if config.cache {
        Ok(Arc::new(CachedEmbedder::new(base)))
    } else {
        Ok(base)
    }
}
