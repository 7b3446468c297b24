use crate::error::{Result, VectorStoreError};
use crate::types::CodeChunk;
use std::io::ErrorKind;
use std::path::Path;

/// The persisted collection of chunks for one source tree snapshot.
///
/// One index build creates the whole collection; readers load their own
/// in-memory copy, so concurrent queries against a stable artifact need no
/// locking. Writes are last-writer-wins.
#[derive(Debug, Default)]
pub struct ChunkIndex {
    chunks: Vec<CodeChunk>,
}

impl ChunkIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    #[must_use]
    pub fn from_chunks(chunks: Vec<CodeChunk>) -> Self {
        Self { chunks }
    }

    pub fn push(&mut self, chunk: CodeChunk) {
        self.chunks.push(chunk);
    }

    /// Chunks in artifact order
    #[must_use]
    pub fn chunks(&self) -> &[CodeChunk] {
        &self.chunks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Load an artifact from disk.
    ///
    /// A missing file is a precondition failure (`NotFound`), distinct from
    /// a present-but-unreadable artifact (`Corrupt`).
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = match tokio::fs::read_to_string(path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(VectorStoreError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let chunks: Vec<CodeChunk> =
            serde_json::from_str(&data).map_err(|source| VectorStoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Loaded {} chunks from {}", chunks.len(), path.display());
        Ok(Self { chunks })
    }

    /// Persist the whole collection as one atomic write.
    ///
    /// The collection is serialized to a sibling temp file and renamed into
    /// place, so readers never observe a partially written artifact and a
    /// failed build leaves any prior artifact untouched.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_string(&self.chunks)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, path).await?;

        log::info!("Saved {} chunks to {}", self.chunks.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn chunk(id: usize, file: &str) -> CodeChunk {
        CodeChunk::new(
            format!("chunk_{id}"),
            file.to_string(),
            "content\n".to_string(),
            vec![0.1, 0.2],
        )
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("code_index.json");

        let index = ChunkIndex::from_chunks(vec![chunk(0, "a.ts"), chunk(1, "b.ts")]);
        index.save(&path).await.unwrap();

        let loaded = ChunkIndex::load(&path).await.unwrap();
        assert_eq!(loaded.chunks(), index.chunks());
    }

    #[tokio::test]
    async fn missing_artifact_is_not_found() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("absent.json");
        let err = ChunkIndex::load(&path).await.unwrap_err();
        assert!(matches!(err, VectorStoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_artifact_is_corrupt_with_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("code_index.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = ChunkIndex::load(&path).await.unwrap_err();
        match err {
            VectorStoreError::Corrupt { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn save_overwrites_prior_artifact() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("code_index.json");

        ChunkIndex::from_chunks(vec![chunk(0, "old.ts")])
            .save(&path)
            .await
            .unwrap();
        ChunkIndex::from_chunks(vec![chunk(0, "new.ts"), chunk(1, "new.ts")])
            .save(&path)
            .await
            .unwrap();

        let loaded = ChunkIndex::load(&path).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.chunks()[0].file, "new.ts");
    }

    #[tokio::test]
    async fn no_temp_file_left_behind() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("code_index.json");
        ChunkIndex::from_chunks(vec![chunk(0, "a.ts")])
            .save(&path)
            .await
            .unwrap();

        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn empty_collection_round_trips() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("code_index.json");
        ChunkIndex::new().save(&path).await.unwrap();

        let loaded = ChunkIndex::load(&path).await.unwrap();
        assert!(loaded.is_empty());
    }
}
