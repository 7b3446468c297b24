use codescout_chunker::{Chunker, ChunkerConfig};
use proptest::prelude::*;

proptest! {
    /// Concatenating a file's chunks in emission order reproduces the file
    /// exactly, for any content and any budget >= 1.
    #[test]
    fn chunks_reconstruct_input(content in "(?s).{0,2000}", budget in 1usize..500) {
        let chunker = Chunker::new(ChunkerConfig::with_budget(budget)).unwrap();
        let chunks = chunker.chunk_str(&content);
        prop_assert_eq!(chunks.concat(), content);
    }

    /// Every chunk respects the budget unless it consists of a single line
    /// that is already longer than the budget.
    #[test]
    fn budget_respected_except_oversized_lines(
        content in "(?s).{0,2000}",
        budget in 1usize..500,
    ) {
        let chunker = Chunker::new(ChunkerConfig::with_budget(budget)).unwrap();
        for chunk in chunker.chunk_str(&content) {
            let single_oversized_line =
                chunk.split_inclusive('\n').count() == 1 && chunk.len() > budget;
            prop_assert!(chunk.len() <= budget || single_oversized_line);
        }
    }

    /// No chunk is ever empty.
    #[test]
    fn no_empty_chunks(content in "(?s).{0,2000}", budget in 1usize..500) {
        let chunker = Chunker::new(ChunkerConfig::with_budget(budget)).unwrap();
        prop_assert!(chunker.chunk_str(&content).iter().all(|c| !c.is_empty()));
    }
}
