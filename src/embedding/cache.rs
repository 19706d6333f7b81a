//! Content-hash-keyed embedding cache.
//!
//! Search results are computed per request and never persisted, but
//! embeddings are pure functions of their input text, so they may be cached
//! across requests keyed by a SHA-256 content hash. Entries never expire;
//! the cache is intended for corpus-sized working sets where re-embedding
//! on every search (or every remote round trip) is the real cost.

use std::sync::Arc;

use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::embedding::TextEmbedder;
use crate::error::Result;
use crate::vector::Vector;

/// Caching decorator around any [`TextEmbedder`].
///
/// Only successful embeddings are cached; provider errors pass through
/// uncached so a transient failure does not poison future lookups.
pub struct CachedEmbedder {
    inner: Arc<dyn TextEmbedder>,
    entries: RwLock<AHashMap<String, Vector>>,
}

impl CachedEmbedder {
    /// Wrap an embedder with a content-hash cache.
    pub fn new(inner: Arc<dyn TextEmbedder>) -> Self {
        Self {
            inner,
            entries: RwLock::new(AHashMap::new()),
        }
    }

    /// Number of cached vectors.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// SHA-256 hex digest of the exact input text.
    fn content_key(text: &str) -> String {
        let digest = Sha256::digest(text.as_bytes());
        let mut key = String::with_capacity(digest.len() * 2);
        for byte in digest {
            key.push_str(&format!("{byte:02x}"));
        }
        key
    }
}

#[async_trait]
impl TextEmbedder for CachedEmbedder {
    async fn embed(&self, text: &str) -> Result<Vector> {
        let key = Self::content_key(text);

        if let Some(vector) = self.entries.read().get(&key) {
            return Ok(vector.clone());
        }

        let vector = self.inner.embed(text).await?;
        self.entries.write().insert(key, vector.clone());
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
