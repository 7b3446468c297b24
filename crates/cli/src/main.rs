use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use codescout_chunker::ChunkerConfig;
use codescout_indexer::{ProjectIndexer, ScanOptions};
use codescout_search::SearchEngine;
use codescout_vector_store::{
    EmbeddingProvider, OpenAiEmbedder, OpenAiEmbedderConfig, StubEmbedder,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

mod flags;

use flags::EmbedMode;

#[derive(Parser)]
#[command(name = "codescout")]
#[command(about = "Semantic code search over a repository snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,

    /// Embedding backend
    #[arg(long, global = true, value_enum, default_value = "api")]
    embed_mode: EmbedMode,

    /// Embedding model id (overrides CODESCOUT_EMBED_MODEL)
    #[arg(long, global = true)]
    embed_model: Option<String>,

    /// Embedding API base URL (overrides CODESCOUT_EMBED_URL)
    #[arg(long, global = true)]
    embed_url: Option<String>,

    /// Index artifact path (overrides CODESCOUT_INDEX_PATH)
    #[arg(long, global = true)]
    index: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index artifact from a source tree
    Index(IndexArgs),

    /// Rank indexed chunks against a free-text query
    Search(SearchArgs),
}

#[derive(Args)]
struct IndexArgs {
    /// Root directory to index (overrides CODESCOUT_ROOT)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Chunk character budget
    #[arg(long, default_value_t = 3000)]
    chunk_size: usize,
}

#[derive(Args)]
struct SearchArgs {
    /// Free-text query
    query: String,

    /// Maximum number of results
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Emit results as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let index_path = cli
        .index
        .clone()
        .or_else(|| env::var_os("CODESCOUT_INDEX_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./code_index.json"));

    let embedder = build_embedder(&cli)?;
    log::debug!("Embedding backend: {}", cli.embed_mode.as_str());

    match cli.command {
        Commands::Index(args) => run_index(args, index_path, embedder).await,
        Commands::Search(args) => run_search(args, index_path, embedder).await,
    }
}

fn build_embedder(cli: &Cli) -> Result<Arc<dyn EmbeddingProvider>> {
    match cli.embed_mode {
        EmbedMode::Stub => Ok(Arc::new(StubEmbedder::default())),
        EmbedMode::Api => {
            let api_key = env::var("CODESCOUT_API_KEY")
                .or_else(|_| env::var("OPENAI_API_KEY"))
                .unwrap_or_default();
            if api_key.is_empty() {
                bail!(
                    "No API key: set CODESCOUT_API_KEY or OPENAI_API_KEY, \
                     or use --embed-mode stub"
                );
            }

            let mut config = OpenAiEmbedderConfig {
                api_key,
                ..Default::default()
            };
            if let Some(url) = cli
                .embed_url
                .clone()
                .or_else(|| env::var("CODESCOUT_EMBED_URL").ok())
            {
                config.base_url = url;
            }
            if let Some(model) = cli
                .embed_model
                .clone()
                .or_else(|| env::var("CODESCOUT_EMBED_MODEL").ok())
            {
                config.model = model;
            }
            Ok(Arc::new(OpenAiEmbedder::new(config)))
        }
    }
}

async fn run_index(
    args: IndexArgs,
    index_path: PathBuf,
    embedder: Arc<dyn EmbeddingProvider>,
) -> Result<()> {
    let root = args
        .root
        .or_else(|| env::var_os("CODESCOUT_ROOT").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./"));

    let indexer = ProjectIndexer::with_config(
        &root,
        &index_path,
        embedder,
        ChunkerConfig::with_budget(args.chunk_size),
        ScanOptions::default(),
    )
    .with_context(|| format!("creating indexer for {}", root.display()))?;

    let stats = indexer.build_index().await.context("index build failed")?;

    println!(
        "Indexed {} files into {} chunks in {}ms ({} skipped)",
        stats.files,
        stats.chunks,
        stats.time_ms,
        stats.errors.len()
    );
    Ok(())
}

async fn run_search(
    args: SearchArgs,
    index_path: PathBuf,
    embedder: Arc<dyn EmbeddingProvider>,
) -> Result<()> {
    let engine = SearchEngine::new(&index_path, embedder);
    let results = engine
        .search(&args.query, args.top_k)
        .await
        .context("search failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}. {} ({:.1}% match)",
            rank + 1,
            result.file,
            result.score * 100.0
        );
        for line in result.content.lines() {
            println!("   {line}");
        }
        println!();
    }
    Ok(())
}
