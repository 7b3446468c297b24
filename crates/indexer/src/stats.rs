use serde::{Deserialize, Serialize};

/// Statistics about one index build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of files successfully processed
    pub files: usize,

    /// Number of chunks embedded and written
    pub chunks: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,

    /// Per-file errors that were skipped (build continued)
    pub errors: Vec<String>,
}

impl IndexStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self) {
        self.files += 1;
    }

    pub fn add_chunks(&mut self, count: usize) {
        self.chunks += count;
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}
