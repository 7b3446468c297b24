use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorStoreError>;

#[derive(Error, Debug)]
pub enum VectorStoreError {
    /// Transport-level failure talking to the embedding service
    #[error("Embedding request failed: {0}")]
    EmbeddingTransport(#[from] reqwest::Error),

    /// The embedding service answered with a non-success status
    #[error("Embedding service error (status {status}): {message}")]
    EmbeddingService { status: u16, message: String },

    /// The embedding service answered 2xx but the body was unusable
    #[error("Malformed embedding response: {0}")]
    MalformedResponse(String),

    /// No index artifact at the configured path; the indexer must run first
    #[error("Index artifact not found at {path}; run the indexer first")]
    NotFound { path: PathBuf },

    /// The artifact exists but could not be deserialized
    #[error("Corrupt index artifact at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
