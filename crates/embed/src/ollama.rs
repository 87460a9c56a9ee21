use async_trait::async_trait;
use campusqa_common::Result;
use reqwest::Client;
use tracing::{debug, info};

use crate::client::EmbeddingClient;
use crate::types::{EmbedRequest, EmbedResponse};

const MAX_RETRIES: u32 = 3;

/// Ollama embeddings API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
    dimension: usize,
}

impl OllamaClient {
    /// Connect to Ollama and probe the embedding dimension.
    ///
    /// The probe doubles as a connectivity check, so a misconfigured or
    /// unreachable server fails at startup rather than on the first query.
    pub async fn connect(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        let mut probe = Self {
            base_url,
            model,
            client,
            dimension: 0,
        };

        let embedding = probe.embed_with_retry("dimension probe", MAX_RETRIES).await?;
        probe.dimension = embedding.len();

        info!(
            "Ollama client initialized: {} model={} dim={}",
            probe.base_url, probe.model, probe.dimension
        );
        Ok(probe)
    }

    async fn embed_with_retry(&self, text: &str, max_retries: u32) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.base_url);

        debug!(
            "Generating embedding - Model: {}, Text length: {}",
            self.model,
            text.len()
        );

        let request = EmbedRequest {
            model: self.model.clone(),
            prompt: text.to_string(),
        };

        let mut last_error = None;

        for attempt in 1..=max_retries {
            match self.try_embed(&url, &request).await {
                Ok(embedding) => {
                    debug!("Received embedding - Dimension: {}", embedding.len());
                    return Ok(embedding);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < max_retries {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        tracing::warn!(
                            "Embedding request failed (attempt {}/{}). Retrying in {:?}...",
                            attempt,
                            max_retries,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("All retries failed").into()))
    }

    /// Single attempt to generate an embedding
    async fn try_embed(&self, url: &str, request: &EmbedRequest) -> Result<Vec<f32>> {
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send embedding request: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Ollama embedding API error: {}", e))?;

        let result: EmbedResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse embedding response: {}", e))?;

        if result.embedding.is_empty() {
            return Err(anyhow::anyhow!("Empty embedding from Ollama").into());
        }

        Ok(result.embedding)
    }
}

#[async_trait]
impl EmbeddingClient for OllamaClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_with_retry(text, MAX_RETRIES).await
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
