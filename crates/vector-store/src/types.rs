use serde::{Deserialize, Serialize};

/// The atomic indexed unit: one line-aligned slice of a source file together
/// with its embedding vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeChunk {
    /// Opaque identifier, assigned sequentially during one index build.
    /// Not stable across rebuilds.
    pub id: String,

    /// Source file path, relative to the indexed root (`/`-separated)
    pub file: String,

    /// Verbatim chunk text (whole lines, original terminators)
    pub content: String,

    /// Embedding vector; length is fixed by the model across one index
    pub embedding: Vec<f32>,
}

impl CodeChunk {
    #[must_use]
    pub const fn new(id: String, file: String, content: String, embedding: Vec<f32>) -> Self {
        Self {
            id,
            file,
            content,
            embedding,
        }
    }

    /// Embedding dimensionality
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}

/// A ranked search hit. Derived per query, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult {
    pub file: String,
    pub content: String,
    /// Cosine similarity against the query embedding, nominally in [-1, 1]
    pub score: f32,
}
