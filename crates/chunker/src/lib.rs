//! # Codescout Chunker
//!
//! Line-aligned text chunking for semantic code search.
//!
//! ## Philosophy
//!
//! The chunker splits a file into bounded-size fragments that:
//! - Never cut a source line in half
//! - Reconstruct the original file exactly when concatenated in order
//! - Stay under a configurable character budget (embedding models degrade
//!   on oversized inputs)
//!
//! ## Pipeline
//!
//! ```text
//! File content
//!     │
//!     ├──> Line scan (terminators preserved)
//!     │
//!     └──> Budget-bounded accumulation
//!            └─> chunk strings, flushed at line boundaries
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codescout_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//! let chunks = chunker.chunk_str("fn main() {\n    println!(\"hi\");\n}\n");
//! assert_eq!(chunks.concat(), "fn main() {\n    println!(\"hi\");\n}\n");
//! ```

mod chunker;
mod config;
mod error;

pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
