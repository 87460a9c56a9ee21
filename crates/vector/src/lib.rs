//! Question embedding index and threshold-gated retrieval engine.

pub mod engine;
pub mod index;

pub use engine::{QueryOutcome, RetrievalEngine, RetrievalParams};
pub use index::{Hit, QuestionIndex};
