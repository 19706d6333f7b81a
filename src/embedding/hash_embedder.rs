//! Deterministic hash-based pseudo-embedder.
//!
//! This is a degraded, non-semantic fallback, not a real embedding model:
//! it hashes each token with SHA-256, accumulates the digest bytes into a
//! fixed-length vector, and L2-normalizes the result. Identical text always
//! yields an identical vector, and any similarity between different texts
//! beyond shared tokens is coincidental hash collision. It exists so hybrid
//! search keeps working (on lexical strength plus token-identity overlap)
//! when no remote provider is configured.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::analysis::tokenize;
use crate::embedding::{HASH_DIMENSION, TextEmbedder};
use crate::error::Result;
use crate::vector::Vector;

/// Local hash-accumulation embedder.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create a hash embedder with the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(HASH_DIMENSION)
    }
}

#[async_trait]
impl TextEmbedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vector> {
        let mut accumulator = vec![0.0f32; self.dimension];

        for token in tokenize(text) {
            let digest = Sha256::digest(token.as_bytes());
            for (position, byte) in digest.iter().enumerate() {
                let slot = (position + *byte as usize) % self.dimension;
                accumulator[slot] += f32::from(*byte) / 255.0;
            }
        }

        let mut vector = Vector::new(accumulator);
        vector.normalize();
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &'static str {
        "local-hash"
    }
}
