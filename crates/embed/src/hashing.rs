use async_trait::async_trait;
use campusqa_common::Result;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::client::EmbeddingClient;

const DEFAULT_DIMENSION: usize = 384;

/// Deterministic token-hashing embedder.
///
/// Builds a bag-of-words feature-hashing vector: each lowercased
/// alphanumeric token hashes to one component, with a hash-derived sign to
/// spread collisions. No model server involved, so identical normalized
/// texts always land on the same vector. Semantics are crude next to a
/// real sentence encoder; this backend exists for offline runs and test
/// fixtures.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    pub fn new() -> Self {
        Self::with_dimension(DEFAULT_DIMENSION)
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_tokens(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        let lowered = text.to_lowercase();

        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let hash = hasher.finish();

            let index = (hash % self.dimension as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[index] += sign;
        }

        vector
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingClient for HashingEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.embed_tokens(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        "token-hashing"
    }
}
