//! # Codescout Indexer
//!
//! Offline index builds for semantic code search.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> File Scanner (name-based exclusions, extension allow-list)
//!     │      └─> Source files
//!     │
//!     ├──> Chunker (line-aligned, budget-bounded)
//!     │      └─> Chunk strings
//!     │
//!     └──> Embedding Provider (throttled, sequential)
//!            └─> Index artifact (one atomic write)
//! ```
//!
//! Per-file read failures are logged and skipped; an embedding failure
//! aborts the whole build and leaves no artifact behind.
//!
//! ## Example
//!
//! ```no_run
//! use codescout_indexer::ProjectIndexer;
//! use codescout_vector_store::StubEmbedder;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let indexer = ProjectIndexer::new(
//!         "/path/to/project",
//!         "code_index.json",
//!         Arc::new(StubEmbedder::default()),
//!     )?;
//!     let stats = indexer.build_index().await?;
//!
//!     println!("Indexed {} files, {} chunks", stats.files, stats.chunks);
//!     Ok(())
//! }
//! ```

mod error;
mod ids;
mod indexer;
mod scanner;
mod stats;

pub use error::{IndexerError, Result};
pub use ids::ChunkIdSequence;
pub use indexer::ProjectIndexer;
pub use scanner::{FileScanner, ScanOptions};
pub use stats::IndexStats;
