//! # shiori-cli
//!
//! One-shot command-line driver for the `shiori` bookmark organizer: read a
//! bookmark export, classify everything, write the re-importable result.

use anyhow::{bail, Context, Result};
use clap::Parser;
use shiori::constants::{DEFAULT_BATCH_DELAY_SECS, DEFAULT_BATCH_SIZE, DEFAULT_OUTPUT_FILE};
use shiori::export::{build_folder_tree, write_bookmark_file};
use shiori::extract::extract_bookmarks;
use shiori::providers::factory::create_provider;
use shiori::OrganizerBuilder;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Organize a browser bookmark export into AI-classified folders", long_about = None)]
struct Cli {
    /// Path to the bookmark HTML export to organize
    input: PathBuf,

    /// Path of the organized bookmark file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Model used for classification (gemini-* selects the Gemini API)
    #[arg(long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Number of bookmarks per classification request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Pause between classification requests, in seconds
    #[arg(long, default_value_t = DEFAULT_BATCH_DELAY_SECS)]
    batch_delay: u64,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("input file not found: {}", cli.input.display());
    }

    // Provider construction is a startup concern: fail before any work.
    let provider = create_provider(&cli.model)?;
    let organizer = OrganizerBuilder::new()
        .ai_provider(provider)
        .batch_size(cli.batch_size)
        .batch_delay(Duration::from_secs(cli.batch_delay))
        .build()?;

    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!("Read input file: {}", cli.input.display());

    let bookmarks = extract_bookmarks(&html);
    if bookmarks.is_empty() {
        println!("No link entries were found in the input.");
        return Ok(());
    }
    println!("Found {} bookmarks. Starting batch classification...", bookmarks.len());

    let accumulator = organizer.classify_bookmarks(&bookmarks).await;
    let tree = build_folder_tree(accumulator.into_map());

    println!("\nCategories:");
    for (path, category_bookmarks) in tree.flatten() {
        println!("  {path} ({})", category_bookmarks.len());
    }

    if let Err(e) = write_bookmark_file(&tree, &cli.output) {
        // The classification itself is complete; only the export step failed.
        eprintln!("Failed to write {}: {e}", cli.output.display());
        std::process::exit(1);
    }

    println!("\nDone: bookmarks exported to '{}'.", cli.output.display());
    println!("Import this file from your browser's bookmark manager.");
    Ok(())
}
