//! Text embedding backends for CampusQA.
//!
//! [`EmbeddingClient`] is the seam between retrieval and the embedding
//! capability: deterministic, fixed-dimensional vectors. [`OllamaClient`]
//! talks to a local Ollama server; [`HashingEmbedder`] is a deterministic
//! offline fallback used by tests and the `hashing` backend.

pub mod client;
pub mod hashing;
pub mod ollama;
pub mod types;

pub use client::EmbeddingClient;
pub use hashing::HashingEmbedder;
pub use ollama::OllamaClient;

/// Scale a vector to unit length in place. Zero vectors are left as-is.
///
/// All vectors are unit-normalized before entering the index, so inner
/// product equals cosine similarity.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_normalize() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalize_zero_vector_unchanged() {
        let mut v = vec![0.0, 0.0, 0.0];
        l2_normalize(&mut v);
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
    }
}
