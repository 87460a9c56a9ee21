use serde::{Deserialize, Serialize};

/// Ollama embeddings API request
#[derive(Debug, Clone, Serialize)]
pub struct EmbedRequest {
    /// Model name
    pub model: String,

    /// Text to embed
    pub prompt: String,
}

/// Ollama embeddings API response
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedResponse {
    /// Embedding vector
    pub embedding: Vec<f32>,
}
