use crate::error::{IndexerError, Result};
use crate::ids::ChunkIdSequence;
use crate::scanner::{FileScanner, ScanOptions};
use crate::stats::IndexStats;
use codescout_chunker::{Chunker, ChunkerConfig};
use codescout_vector_store::{ChunkIndex, CodeChunk, EmbeddingProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Project indexer that scans, chunks, and embeds a source tree into one
/// index artifact.
///
/// The build is fail-fast on the embedding side: any oracle error aborts
/// the run and no artifact is written. Per-file read errors are tolerated
/// and recorded in [`IndexStats::errors`].
pub struct ProjectIndexer {
    root: PathBuf,
    index_path: PathBuf,
    chunker: Chunker,
    scan_options: ScanOptions,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl ProjectIndexer {
    /// Create a new indexer for the project at `root`, writing to `index_path`
    pub fn new(
        root: impl AsRef<Path>,
        index_path: impl AsRef<Path>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        Self::with_config(
            root,
            index_path,
            embedder,
            ChunkerConfig::default(),
            ScanOptions::default(),
        )
    }

    pub fn with_config(
        root: impl AsRef<Path>,
        index_path: impl AsRef<Path>,
        embedder: Arc<dyn EmbeddingProvider>,
        chunker_config: ChunkerConfig,
        scan_options: ScanOptions,
    ) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            return Err(IndexerError::InvalidPath(format!(
                "Path does not exist: {}",
                root.display()
            )));
        }

        Ok(Self {
            root,
            index_path: index_path.as_ref().to_path_buf(),
            chunker: Chunker::new(chunker_config)?,
            scan_options,
            embedder,
        })
    }

    /// Build the index from scratch and write the artifact.
    ///
    /// The previous artifact, if any, is fully superseded, never merged.
    pub async fn build_index(&self) -> Result<IndexStats> {
        let start = Instant::now();
        let mut stats = IndexStats::new();

        log::info!("Building code index from {}", self.root.display());

        let scanner = FileScanner::with_options(&self.root, self.scan_options.clone());
        let files = scanner.scan();
        log::info!("Found {} files to index", files.len());

        let mut index = ChunkIndex::new();
        let mut ids = ChunkIdSequence::new();
        let mut dimension: Option<usize> = None;

        for file in &files {
            let content = match tokio::fs::read_to_string(file).await {
                Ok(content) => content,
                Err(err) => {
                    log::warn!("Error reading file {}: {err}", file.display());
                    stats.add_error(format!("{}: {err}", file.display()));
                    continue;
                }
            };

            let relative = self.relative_path(file);
            let chunks = self.chunker.chunk_str(&content);
            log::debug!("Processing {relative} ({} chunks)", chunks.len());

            for chunk in chunks {
                let embedding = self.embedder.embed(&chunk).await?;

                match dimension {
                    None => dimension = Some(embedding.len()),
                    Some(expected) if expected != embedding.len() => {
                        return Err(IndexerError::InconsistentDimension {
                            file: relative,
                            expected,
                            actual: embedding.len(),
                        });
                    }
                    Some(_) => {}
                }

                index.push(CodeChunk::new(
                    ids.next_id(),
                    relative.clone(),
                    chunk,
                    embedding,
                ));
            }

            stats.add_file();
        }

        stats.add_chunks(index.len());
        index.save(&self.index_path).await?;

        stats.time_ms = start.elapsed().as_millis() as u64;
        log::info!(
            "Indexed {} files into {} chunks in {}ms",
            stats.files,
            stats.chunks,
            stats.time_ms
        );
        Ok(stats)
    }

    /// Root-relative, `/`-separated path for the artifact
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let components: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        components.join("/")
    }
}
