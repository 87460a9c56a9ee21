/// CampusQA error types
#[derive(Debug, thiserror::Error)]
pub enum CampusQaError {
    /// Corpus synthesis/loading error
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Embedding backend error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector index error
    #[error("Index error: {0}")]
    Index(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CampusQaError {
    /// Create corpus error
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        Self::Corpus(msg.into())
    }

    /// Create embedding error
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create index error
    pub fn index<S: Into<String>>(msg: S) -> Self {
        Self::Index(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion (used by the actix routes)
impl CampusQaError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::Json(_) => 400,
            Self::Network(_) => 503,
            Self::Corpus(_) => 500,
            Self::Embedding(_) => 500,
            Self::Index(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CampusQaError::invalid_input("empty query").status_code(), 400);
        assert_eq!(CampusQaError::not_found("x").status_code(), 404);
        assert_eq!(CampusQaError::network("ollama down").status_code(), 503);
        assert_eq!(CampusQaError::corpus("empty").status_code(), 500);
    }
}
