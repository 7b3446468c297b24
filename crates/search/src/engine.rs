use crate::error::Result;
use codescout_vector_store::{
    cosine_similarity, ChunkIndex, EmbeddingProvider, SearchResult,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Ranks indexed chunks against a free-text query.
pub struct SearchEngine {
    index_path: PathBuf,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl SearchEngine {
    pub fn new(index_path: impl AsRef<Path>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            index_path: index_path.as_ref().to_path_buf(),
            embedder,
        }
    }

    /// Return up to `top_k` results, highest score first.
    ///
    /// Fails with `NotFound` if no artifact exists (the indexer must run
    /// first), `Corrupt` if the artifact cannot be deserialized, and
    /// `InvalidDimension` if the query embedding's length differs from any
    /// stored chunk's. Ties keep artifact order, so repeated calls over the
    /// same artifact return identical orderings.
    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let index = ChunkIndex::load(&self.index_path).await?;
        log::debug!(
            "Loaded {} chunks from {}",
            index.len(),
            self.index_path.display()
        );
        if index.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await?;

        let mut scored = Vec::with_capacity(index.len());
        for chunk in index.chunks() {
            let score = cosine_similarity(&query_embedding, &chunk.embedding)?;
            scored.push(SearchResult {
                file: chunk.file.clone(),
                content: chunk.content.clone(),
                score,
            });
        }

        // Stable sort: equal scores keep artifact order for deterministic
        // results across runs. Scores are never NaN (degenerate vectors map
        // to -inf), so total_cmp gives the plain descending order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);

        log::debug!("Returning {} results for query", scored.len());
        Ok(scored)
    }
}
