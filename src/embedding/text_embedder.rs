//! Text embedding trait for Patlex's semantic search pipeline.

use async_trait::async_trait;

use crate::error::Result;
use crate::vector::Vector;

/// Trait for converting text to vector embeddings.
///
/// This trait provides a common interface for embedding providers (remote
/// API services or the local hash fallback) to plug into the hybrid search
/// layer. Implementations hold no per-request state and may be shared as a
/// stateless singleton across concurrent requests.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use patlex::embedding::TextEmbedder;
/// use patlex::error::Result;
/// use patlex::vector::Vector;
///
/// struct ConstantEmbedder {
///     dimension: usize,
/// }
///
/// #[async_trait]
/// impl TextEmbedder for ConstantEmbedder {
///     async fn embed(&self, _text: &str) -> Result<Vector> {
///         Ok(Vector::new(vec![1.0; self.dimension]))
///     }
///
///     fn dimension(&self) -> usize {
///         self.dimension
///     }
///
///     fn name(&self) -> &'static str {
///         "constant"
///     }
/// }
/// ```
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Convert text to a vector embedding.
    async fn embed(&self, text: &str) -> Result<Vector>;

    /// Get the dimensionality of vectors produced by this embedder.
    fn dimension(&self) -> usize;

    /// Short provider name reported in search responses.
    fn name(&self) -> &'static str;
}
