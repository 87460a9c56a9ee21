use crate::error::CampusQaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Which embedding backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedderBackend {
    /// Ollama embeddings API over HTTP
    Ollama,
    /// Deterministic token-hashing embedder (offline, no model server)
    Hashing,
}

impl FromStr for EmbedderBackend {
    type Err = CampusQaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "hashing" => Ok(Self::Hashing),
            other => Err(CampusQaError::config(format!(
                "Unknown embedder backend '{}' (expected 'ollama' or 'hashing')",
                other
            ))),
        }
    }
}

/// CampusQA application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory containing the three upstream JSON documents
    pub data_dir: PathBuf,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Embedding backend
    pub embedder_backend: EmbedderBackend,

    /// Number of nearest neighbours returned per search
    pub top_k: usize,

    /// Minimum similarity for a confident answer
    pub similarity_threshold: f32,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            ollama_base_url: "http://localhost:11434".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            embedder_backend: EmbedderBackend::Ollama,
            top_k: 5,
            similarity_threshold: 0.7,
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, CampusQaError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            data_dir: Self::get_env_path("CAMPUSQA_DATA_DIR").unwrap_or(defaults.data_dir),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or(defaults.embedding_model),
            embedder_backend: match std::env::var("EMBEDDER_BACKEND") {
                Ok(value) => value.parse()?,
                Err(_) => defaults.embedder_backend,
            },
            top_k: Self::get_env_parsed("CAMPUSQA_TOP_K")?.unwrap_or(defaults.top_k),
            similarity_threshold: Self::get_env_parsed("CAMPUSQA_SIMILARITY_THRESHOLD")?
                .unwrap_or(defaults.similarity_threshold),
            server_host: std::env::var("CAMPUSQA_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("CAMPUSQA_PORT")?.unwrap_or(defaults.server_port),
            log_dir: Self::get_env_path("CAMPUSQA_LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("CAMPUSQA_LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), CampusQaError> {
        if self.top_k == 0 {
            return Err(CampusQaError::config("top_k must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(CampusQaError::config(format!(
                "similarity_threshold must be in [0.0, 1.0], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }

    /// Path to the academic schedule document
    pub fn academic_schedule_path(&self) -> PathBuf {
        self.data_dir.join("academic_schedule.json")
    }

    /// Path to the placement data document
    pub fn placement_data_path(&self) -> PathBuf {
        self.data_dir.join("placement_data.json")
    }

    /// Path to the faculty directory document
    pub fn faculty_directory_path(&self) -> PathBuf {
        self.data_dir.join("faculty_data.json")
    }

    /// Server bind address as host:port
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    fn get_env_parsed<T: FromStr>(key: &str) -> Result<Option<T>, CampusQaError>
    where
        T::Err: std::fmt::Display,
    {
        match std::env::var(key) {
            Ok(value) => value
                .parse::<T>()
                .map(Some)
                .map_err(|e| CampusQaError::config(format!("Invalid {}: {}", key, e))),
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.similarity_threshold, 0.7);
        assert_eq!(config.server_bind_address(), "0.0.0.0:5000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_data_paths() {
        let config = AppConfig::default();
        assert!(config
            .academic_schedule_path()
            .ends_with("academic_schedule.json"));
        assert!(config.placement_data_path().ends_with("placement_data.json"));
        assert!(config.faculty_directory_path().ends_with("faculty_data.json"));
    }

    #[test]
    fn test_validate_rejects_zero_top_k() {
        let config = AppConfig {
            top_k: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let config = AppConfig {
            similarity_threshold: 1.5,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_embedder_backend_from_str() {
        assert_eq!(
            "ollama".parse::<EmbedderBackend>().unwrap(),
            EmbedderBackend::Ollama
        );
        assert_eq!(
            "Hashing".parse::<EmbedderBackend>().unwrap(),
            EmbedderBackend::Hashing
        );
        assert!("faiss".parse::<EmbedderBackend>().is_err());
    }
}
