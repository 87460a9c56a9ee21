use campusqa_common::text::{normalize, normalize_question};
use campusqa_common::{AppConfig, CampusQaError, Result};
use campusqa_corpus::Corpus;
use campusqa_embed::{l2_normalize, EmbeddingClient};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Retrieval tuning knobs, read from configuration.
#[derive(Debug, Clone, Copy)]
pub struct RetrievalParams {
    /// Number of nearest neighbours fetched per query
    pub top_k: usize,

    /// Minimum best-match similarity for a confident answer
    pub threshold: f32,
}

impl From<&AppConfig> for RetrievalParams {
    fn from(config: &AppConfig) -> Self {
        Self {
            top_k: config.top_k,
            threshold: config.similarity_threshold,
        }
    }
}

/// Outcome of one query: either a confident answer, or a disambiguation
/// list of the nearest corpus questions.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub answer: Option<String>,
    pub similar_questions: Vec<String>,
}

/// Threshold-gated semantic retrieval over the synthesized corpus.
///
/// Owns the corpus, its index, and the embedding client; immutable after
/// construction, so it can sit behind an `Arc` with unlimited concurrent
/// readers.
pub struct RetrievalEngine {
    corpus: Corpus,
    index: crate::index::QuestionIndex,
    client: Arc<dyn EmbeddingClient>,
    params: RetrievalParams,
}

impl RetrievalEngine {
    /// Embed the corpus, build the index, and assemble the engine.
    pub async fn build(
        corpus: Corpus,
        client: Arc<dyn EmbeddingClient>,
        params: RetrievalParams,
    ) -> Result<Self> {
        if params.top_k == 0 {
            return Err(CampusQaError::config("top_k must be at least 1"));
        }

        let index = crate::index::QuestionIndex::build(&corpus, client.as_ref()).await?;

        Ok(Self {
            corpus,
            index,
            client,
            params,
        })
    }

    /// Answer a query, or return disambiguation candidates.
    ///
    /// An empty/whitespace query is a client-input error. A best match
    /// below the threshold is not an error: the outcome carries the
    /// `top_k` nearest corpus questions instead of an answer.
    pub async fn answer(&self, query: &str) -> Result<QueryOutcome> {
        if normalize(query).is_empty() {
            return Err(CampusQaError::invalid_input("Query cannot be empty"));
        }

        let normalized = normalize_question(query);
        let mut query_vector = self.client.embed(&normalized).await?;
        l2_normalize(&mut query_vector);

        let hits = self.index.search(&query_vector, self.params.top_k);
        let best = hits
            .first()
            .copied()
            .ok_or_else(|| CampusQaError::internal("Search returned no hits"))?;

        debug!(
            "Query '{}': best score {:.4} (threshold {})",
            normalized, best.score, self.params.threshold
        );

        if best.score >= self.params.threshold {
            Ok(QueryOutcome {
                answer: Some(self.corpus[best.position].answer.clone()),
                similar_questions: Vec::new(),
            })
        } else {
            Ok(QueryOutcome {
                answer: None,
                similar_questions: hits
                    .iter()
                    .map(|hit| self.index.question(hit.position).to_string())
                    .collect(),
            })
        }
    }

    /// Number of corpus entries behind the index
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Embedding model identifier
    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Tuning parameters in effect
    pub fn params(&self) -> RetrievalParams {
        self.params
    }
}
