use serde::{Deserialize, Serialize};

/// Configuration for chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum chunk size in characters (hard limit, except for a single
    /// line that is already longer; lines are never split)
    pub max_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: 3000,
        }
    }
}

impl ChunkerConfig {
    /// Create config with an explicit character budget
    #[must_use]
    pub const fn with_budget(max_chunk_chars: usize) -> Self {
        Self { max_chunk_chars }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_chars == 0 {
            return Err("max_chunk_chars must be > 0".to_string());
        }
        Ok(())
    }
}
