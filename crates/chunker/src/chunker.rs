use crate::config::ChunkerConfig;
use crate::error::{ChunkerError, Result};

/// Splits file content into bounded, line-aligned chunks.
///
/// Chunk boundaries fall only at line boundaries. Concatenating the emitted
/// chunks in order reproduces the input byte-for-byte, including `\r\n`
/// terminators and a missing final newline.
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker with the given configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(Self { config })
    }

    /// Chunk file content into budget-bounded strings.
    ///
    /// A line longer than the budget is emitted as its own oversized chunk
    /// rather than split mid-line. Empty input yields no chunks.
    pub fn chunk_str(&self, content: &str) -> Vec<String> {
        let budget = self.config.max_chunk_chars;
        let mut chunks = Vec::new();
        let mut buffer = String::new();

        for line in content.split_inclusive('\n') {
            if !buffer.is_empty() && buffer.len() + line.len() > budget {
                chunks.push(std::mem::take(&mut buffer));
            }
            buffer.push_str(line);
        }

        if !buffer.is_empty() {
            chunks.push(buffer);
        }

        log::debug!("Produced {} chunks (budget {budget})", chunks.len());
        chunks
    }

    /// The configured character budget
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.config.max_chunk_chars
    }
}
