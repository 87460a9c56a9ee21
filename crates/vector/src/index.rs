use campusqa_common::text::normalize_question;
use campusqa_common::{CampusQaError, Result};
use campusqa_corpus::Corpus;
use campusqa_embed::{l2_normalize, EmbeddingClient};
use tracing::info;

/// One search hit: corpus position plus inner-product score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub position: usize,
    pub score: f32,
}

/// Immutable flat index over unit-normalized question embeddings.
///
/// Vectors are aligned 1:1 by position with the corpus entries they were
/// built from. There is no insert/remove; a changed corpus means a
/// rebuild.
pub struct QuestionIndex {
    vectors: Vec<Vec<f32>>,
    questions: Vec<String>,
    dimension: usize,
}

impl QuestionIndex {
    /// Embed every corpus question and build the index.
    ///
    /// An empty corpus is a fatal build error; search must never run
    /// against an empty index. Embedding dimensionality must be uniform.
    pub async fn build(corpus: &Corpus, client: &dyn EmbeddingClient) -> Result<Self> {
        if corpus.is_empty() {
            return Err(CampusQaError::index(
                "Cannot build an index over an empty corpus",
            ));
        }

        let mut vectors = Vec::with_capacity(corpus.len());
        let mut questions = Vec::with_capacity(corpus.len());
        let mut dimension = 0;

        for entry in corpus {
            let question = normalize_question(&entry.question);
            let mut vector = client.embed(&question).await?;
            l2_normalize(&mut vector);

            if dimension == 0 {
                dimension = vector.len();
            } else if vector.len() != dimension {
                return Err(CampusQaError::index(format!(
                    "Embedding dimension mismatch: expected {}, got {} for '{}'",
                    dimension,
                    vector.len(),
                    question
                )));
            }

            vectors.push(vector);
            questions.push(question);
        }

        info!(
            "Question index built: {} vectors, dimension {}",
            vectors.len(),
            dimension
        );

        Ok(Self {
            vectors,
            questions,
            dimension,
        })
    }

    /// Number of indexed questions
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding dimensionality
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Normalized question text at a corpus position
    pub fn question(&self, position: usize) -> &str {
        &self.questions[position]
    }

    /// Top-K nearest questions by inner product, descending score.
    ///
    /// On unit vectors this is cosine similarity. `k` is capped at the
    /// index length.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| Hit {
                position,
                score: dot(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);
        hits
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusqa_corpus::QaEntry;
    use campusqa_embed::HashingEmbedder;

    fn entry(question: &str, answer: &str) -> QaEntry {
        QaEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[tokio::test]
    async fn test_build_empty_corpus_is_fatal() {
        let client = HashingEmbedder::new();
        let result = QuestionIndex::build(&Vec::new(), &client).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_build_aligns_positions() {
        let corpus = vec![
            entry("When is MSE-I?", "a1"),
            entry("Who is A Rao?", "a2"),
        ];
        let client = HashingEmbedder::new();
        let index = QuestionIndex::build(&corpus, &client).await.unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.dimension(), client.dimension());
        assert_eq!(index.question(0), "when is mse-i?");
        assert_eq!(index.question(1), "who is a rao?");
    }

    #[tokio::test]
    async fn test_search_orders_by_score_descending() {
        let corpus = vec![
            entry("When is MSE-I?", "a1"),
            entry("Who is A Rao?", "a2"),
            entry("List companies with CTC above 7 LPA.", "a3"),
        ];
        let client = HashingEmbedder::new();
        let index = QuestionIndex::build(&corpus, &client).await.unwrap();

        let mut query = client.embed("when is mse-i?").await.unwrap();
        campusqa_embed::l2_normalize(&mut query);
        let hits = index.search(&query, 3);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].position, 0);
        assert!((hits[0].score - 1.0).abs() < 1e-5);
        assert!(hits[0].score >= hits[1].score);
        assert!(hits[1].score >= hits[2].score);
    }

    #[tokio::test]
    async fn test_search_caps_k_at_index_length() {
        let corpus = vec![entry("When is MSE-I?", "a1")];
        let client = HashingEmbedder::new();
        let index = QuestionIndex::build(&corpus, &client).await.unwrap();

        let query = client.embed("anything").await.unwrap();
        assert_eq!(index.search(&query, 10).len(), 1);
    }
}
