//! Chunk command - chunks a text file into practice passages

use std::path::PathBuf;

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::services::{ChunkSizeOverrides, ContentService};

/// Arguments for the chunk command
#[derive(Args)]
pub struct ChunkArgs {
    /// Path to the text file to chunk
    #[arg(long)]
    pub file: PathBuf,

    /// Preferred passage length in characters
    #[arg(long)]
    pub target_length: Option<usize>,

    /// Hard upper bound on passage length
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Paragraphs shorter than this are dropped
    #[arg(long)]
    pub min_length: Option<usize>,
}

/// Chunk a file and print the resulting practice items as JSON
pub async fn run(args: ChunkArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    let service = ContentService::new(config.chunking.to_chunker_config());

    let text = tokio::fs::read_to_string(&args.file).await?;
    let source = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let overrides = ChunkSizeOverrides {
        target_length: args.target_length,
        max_length: args.max_length,
        min_length: args.min_length,
    };

    let items = service.chunk_text(&text, &source, &overrides)?;

    println!("{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}
