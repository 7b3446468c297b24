//! # Codescout Search
//!
//! Query-time ranking against an index artifact.
//!
//! Each search loads its own in-memory copy of the artifact, embeds the
//! query once, scores every chunk by cosine similarity, and returns the
//! top-K matches. Calls share no mutable state, so concurrent queries
//! against a stable artifact are safe without locking.

mod engine;
mod error;

pub use engine::SearchEngine;
pub use error::{Result, SearchError};
