//! # Codescout Vector Store
//!
//! Index artifact storage and similarity scoring for code embeddings.
//!
//! ## Architecture
//!
//! ```text
//! CodeChunk[]
//!     │
//!     ├──> Embedding Provider (HTTP service or deterministic stub)
//!     │      └─> Vector[model dimension]
//!     │
//!     ├──> Cosine Similarity
//!     │      └─> Ranked scores
//!     │
//!     └──> Persistent Storage
//!            └─> JSON artifact (whole collection, atomic rename)
//! ```
//!
//! The artifact is a bare JSON array of chunk records with no header and no
//! version tag. It is created wholesale by one index build, immutable once
//! written, and fully superseded by the next build.
//!
//! ## Example
//!
//! ```no_run
//! use codescout_vector_store::ChunkIndex;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let index = ChunkIndex::load("code_index.json").await?;
//!     println!("{} chunks", index.len());
//!     Ok(())
//! }
//! ```

mod embeddings;
mod error;
mod similarity;
mod store;
mod throttle;
mod types;

pub use embeddings::{EmbeddingProvider, OpenAiEmbedder, OpenAiEmbedderConfig, StubEmbedder};
pub use error::{Result, VectorStoreError};
pub use similarity::cosine_similarity;
pub use store::ChunkIndex;
pub use throttle::RequestGate;
pub use types::{CodeChunk, SearchResult};
