use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// Artifact and scoring failures: `NotFound` (run the indexer first),
    /// `Corrupt`, `InvalidDimension`, and oracle errors all surface here
    #[error("Vector store error: {0}")]
    VectorStore(#[from] codescout_vector_store::VectorStoreError),
}

impl SearchError {
    /// True when the failure is the missing-artifact precondition
    #[must_use]
    pub const fn is_index_missing(&self) -> bool {
        matches!(
            self,
            Self::VectorStore(codescout_vector_store::VectorStoreError::NotFound { .. })
        )
    }
}
