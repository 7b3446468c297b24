/// Sequential chunk id generator, scoped to one build invocation.
///
/// Ids are opaque and not stable across rebuilds; a fresh sequence per
/// build keeps tests deterministic and avoids shared global state.
#[derive(Debug, Default)]
pub struct ChunkIdSequence {
    next: usize,
}

impl ChunkIdSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Produce the next id in the sequence
    pub fn next_id(&mut self) -> String {
        let id = format!("chunk_{}", self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    #[must_use]
    pub const fn issued(&self) -> usize {
        self.next
    }
}
