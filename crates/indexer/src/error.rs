use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chunker error: {0}")]
    Chunker(#[from] codescout_chunker::ChunkerError),

    #[error("Vector store error: {0}")]
    VectorStore(#[from] codescout_vector_store::VectorStoreError),

    #[error("Invalid project path: {0}")]
    InvalidPath(String),

    /// The embedding service changed dimensionality mid-build; mixing
    /// models in one index is never permitted silently
    #[error("Inconsistent embedding dimension for {file}: expected {expected}, got {actual}")]
    InconsistentDimension {
        file: String,
        expected: usize,
        actual: usize,
    },
}
