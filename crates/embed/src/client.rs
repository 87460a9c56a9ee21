use async_trait::async_trait;
use campusqa_common::Result;

/// Common trait for embedding backends.
///
/// Contract: `embed` is deterministic for a given text, and every vector
/// has exactly `dimension()` components.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Generate an embedding for text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embedding dimensionality
    fn dimension(&self) -> usize;

    /// Model name/identifier
    fn model_name(&self) -> &str;
}
