use campusqa_common::{AppConfig, CampusQaError, EmbedderBackend, Result};
use campusqa_corpus::{synthesize, Corpus, SourceDocuments};
use campusqa_embed::{EmbeddingClient, HashingEmbedder, OllamaClient};
use campusqa_vector::{RetrievalEngine, RetrievalParams};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Shared application state.
///
/// Built exactly once at startup, before the listener binds; afterwards
/// everything here is immutable read-only data, safe for any number of
/// concurrent request handlers without locking.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Retrieval engine (corpus + index + embedding client)
    pub engine: RetrievalEngine,

    /// When the corpus/index build finished
    pub built_at: DateTime<Utc>,
}

impl AppState {
    /// Full startup build: load the three source documents, synthesize
    /// the corpus, connect the configured embedding backend, build the
    /// index.
    pub async fn build(config: AppConfig) -> Result<Self> {
        let documents = SourceDocuments::load(&config)?;
        let records = documents.records();
        let corpus = synthesize(&records);

        let client: Arc<dyn EmbeddingClient> = match config.embedder_backend {
            EmbedderBackend::Ollama => Arc::new(
                OllamaClient::connect(&config.ollama_base_url, &config.embedding_model).await?,
            ),
            EmbedderBackend::Hashing => Arc::new(HashingEmbedder::new()),
        };

        Self::from_corpus(config, corpus, client).await
    }

    /// Assemble state from an already-synthesized corpus.
    ///
    /// This is the injection point for test fixtures with a small
    /// synthetic corpus and offline embedder.
    pub async fn from_corpus(
        config: AppConfig,
        corpus: Corpus,
        client: Arc<dyn EmbeddingClient>,
    ) -> Result<Self> {
        if corpus.is_empty() {
            return Err(CampusQaError::corpus(
                "Synthesized corpus is empty; refusing to serve queries",
            ));
        }

        let params = RetrievalParams::from(&config);
        let engine = RetrievalEngine::build(corpus, client, params).await?;

        info!(
            "Application state ready: {} corpus entries, model={}, top_k={}, threshold={}",
            engine.corpus_len(),
            engine.model_name(),
            params.top_k,
            params.threshold
        );

        Ok(Self {
            config,
            engine,
            built_at: Utc::now(),
        })
    }
}
