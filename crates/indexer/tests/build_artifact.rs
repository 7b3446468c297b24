use async_trait::async_trait;
use codescout_chunker::ChunkerConfig;
use codescout_indexer::{ProjectIndexer, ScanOptions};
use codescout_vector_store::{
    ChunkIndex, EmbeddingProvider, StubEmbedder, VectorStoreError,
};
use std::sync::Arc;
use tempfile::TempDir;

struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> codescout_vector_store::Result<Vec<f32>> {
        Err(VectorStoreError::EmbeddingService {
            status: 503,
            message: "rate limited".to_string(),
        })
    }
}

fn indexer_for(
    temp: &TempDir,
    budget: usize,
    embedder: Arc<dyn EmbeddingProvider>,
) -> ProjectIndexer {
    ProjectIndexer::with_config(
        temp.path(),
        temp.path().join("code_index.json"),
        embedder,
        ChunkerConfig::with_budget(budget),
        ScanOptions::default(),
    )
    .expect("indexer")
}

#[tokio::test]
async fn two_file_repo_produces_expected_chunks() {
    let temp = TempDir::new().expect("tempdir");
    // File A: 3 short lines, one chunk under a 50-char budget.
    let content_a = "let a = 1;\nlet b = 2;\nlet c = 3;\n";
    tokio::fs::write(temp.path().join("a.ts"), content_a)
        .await
        .expect("write a");
    // File B: long enough to need two chunks under the same budget.
    let content_b = "const first = \"0123456789012345678901234567\";\nconst second = \"0123456789012345678901234567\";\n";
    tokio::fs::write(temp.path().join("b.ts"), content_b)
        .await
        .expect("write b");

    let indexer = indexer_for(&temp, 50, Arc::new(StubEmbedder::default()));
    let stats = indexer.build_index().await.expect("build");

    assert_eq!(stats.files, 2);
    assert_eq!(stats.chunks, 3);
    assert!(stats.errors.is_empty());

    let index = ChunkIndex::load(temp.path().join("code_index.json"))
        .await
        .expect("load");
    assert_eq!(index.len(), 3);

    // Concatenating each file's chunks in artifact order reconstructs it.
    let rebuilt_a: String = index
        .chunks()
        .iter()
        .filter(|c| c.file == "a.ts")
        .map(|c| c.content.as_str())
        .collect();
    assert_eq!(rebuilt_a, content_a);

    let b_chunks: Vec<_> = index.chunks().iter().filter(|c| c.file == "b.ts").collect();
    assert_eq!(b_chunks.len(), 2);
    let rebuilt_b: String = b_chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(rebuilt_b, content_b);

    // Ids are sequential within the build and all dimensions agree.
    let ids: Vec<_> = index.chunks().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["chunk_0", "chunk_1", "chunk_2"]);
    let dim = index.chunks()[0].dimension();
    assert!(index.chunks().iter().all(|c| c.dimension() == dim));
}

#[tokio::test]
async fn nested_files_get_relative_slash_paths() {
    let temp = TempDir::new().expect("tempdir");
    let nested = temp.path().join("src").join("utils");
    tokio::fs::create_dir_all(&nested).await.expect("mkdir");
    tokio::fs::write(nested.join("helpers.ts"), "export const x = 1;\n")
        .await
        .expect("write");

    let indexer = indexer_for(&temp, 3000, Arc::new(StubEmbedder::default()));
    indexer.build_index().await.expect("build");

    let index = ChunkIndex::load(temp.path().join("code_index.json"))
        .await
        .expect("load");
    assert_eq!(index.len(), 1);
    assert_eq!(index.chunks()[0].file, "src/utils/helpers.ts");
}

#[tokio::test]
async fn unreadable_file_is_skipped_and_recorded() {
    let temp = TempDir::new().expect("tempdir");
    tokio::fs::write(temp.path().join("good.ts"), "let ok = true;\n")
        .await
        .expect("write good");
    // Invalid UTF-8 makes read_to_string fail for this file only.
    tokio::fs::write(temp.path().join("bad.ts"), [0xFF, 0xFE, 0x00, 0xAB])
        .await
        .expect("write bad");

    let indexer = indexer_for(&temp, 3000, Arc::new(StubEmbedder::default()));
    let stats = indexer.build_index().await.expect("build");

    assert_eq!(stats.files, 1);
    assert_eq!(stats.errors.len(), 1);
    assert!(stats.errors[0].contains("bad.ts"));

    let index = ChunkIndex::load(temp.path().join("code_index.json"))
        .await
        .expect("load");
    assert_eq!(index.len(), 1);
    assert_eq!(index.chunks()[0].file, "good.ts");
}

#[tokio::test]
async fn oracle_failure_aborts_build_without_artifact() {
    let temp = TempDir::new().expect("tempdir");
    tokio::fs::write(temp.path().join("a.ts"), "let a = 1;\n")
        .await
        .expect("write");

    let indexer = indexer_for(&temp, 3000, Arc::new(FailingEmbedder));
    let result = indexer.build_index().await;

    assert!(result.is_err());
    assert!(!temp.path().join("code_index.json").exists());
}

#[tokio::test]
async fn rebuild_supersedes_prior_artifact() {
    let temp = TempDir::new().expect("tempdir");
    let file = temp.path().join("a.ts");
    tokio::fs::write(&file, "let a = 1;\n").await.expect("write");

    let indexer = indexer_for(&temp, 3000, Arc::new(StubEmbedder::default()));
    indexer.build_index().await.expect("first build");

    tokio::fs::write(&file, "let a = 1;\nlet b = 2;\n")
        .await
        .expect("rewrite");
    indexer.build_index().await.expect("second build");

    let index = ChunkIndex::load(temp.path().join("code_index.json"))
        .await
        .expect("load");
    // Whole-collection overwrite: the artifact reflects only the last build.
    assert_eq!(index.len(), 1);
    assert_eq!(index.chunks()[0].content, "let a = 1;\nlet b = 2;\n");
    assert_eq!(index.chunks()[0].id, "chunk_0");
}

#[tokio::test]
async fn empty_project_writes_empty_artifact() {
    let temp = TempDir::new().expect("tempdir");
    let indexer = indexer_for(&temp, 3000, Arc::new(StubEmbedder::default()));
    let stats = indexer.build_index().await.expect("build");

    assert_eq!(stats.files, 0);
    assert_eq!(stats.chunks, 0);

    let index = ChunkIndex::load(temp.path().join("code_index.json"))
        .await
        .expect("load");
    assert!(index.is_empty());
}

#[tokio::test]
async fn missing_root_is_invalid_path() {
    let temp = TempDir::new().expect("tempdir");
    let result = ProjectIndexer::new(
        temp.path().join("does-not-exist"),
        temp.path().join("code_index.json"),
        Arc::new(StubEmbedder::default()),
    );
    assert!(matches!(
        result,
        Err(codescout_indexer::IndexerError::InvalidPath(_))
    ));
}
