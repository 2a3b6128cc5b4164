//! Ladle CLI - recipe book cost/energy summary tool

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ladle_core::{Lookups, RecipeBook};
use ladle_csv::{DatasetReader, SummaryWriter};
use ladle_engine::{build_summary, compute_costs, compute_energy};

#[derive(Parser)]
#[command(name = "ladle")]
#[command(
    author,
    version,
    about = "Process recipe book data and generate a cost/energy summary"
)]
struct Cli {
    /// Run the full pipeline and write the summary
    #[arg(short, long)]
    execute: bool,

    /// Load, preview, and compute without writing output
    #[arg(long)]
    dry_run: bool,

    /// Dataset directory to process
    #[arg(long, default_value = "recipe_book")]
    file: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "summary.csv")]
    output: PathBuf,

    /// JSON file overriding the built-in temperature/duration tables
    #[arg(long)]
    lookups: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if !cli.execute && !cli.dry_run {
        Cli::command().print_help()?;
        return Ok(());
    }

    let lookups = load_lookups(cli.lookups.as_deref())?;

    println!("Starting recipe processing...");
    let book = DatasetReader::read_dir(&cli.file)
        .with_context(|| format!("Failed to load dataset '{}'", cli.file.display()))?;

    if cli.dry_run {
        preview(&book);
    }

    let costs = compute_costs(&book);
    let report = compute_energy(&book, &lookups);
    let rows = build_summary(&book, &costs, &report);

    if cli.dry_run {
        println!("DRY RUN: Would save to {}", cli.output.display());
        return Ok(());
    }

    SummaryWriter::write_file(&rows, &cli.output)
        .with_context(|| format!("Failed to write '{}'", cli.output.display()))?;

    info!("Saved summary with {} rows to {}", rows.len(), cli.output.display());
    println!("Summary saved to {}", cli.output.display());
    Ok(())
}

fn load_lookups(path: Option<&Path>) -> Result<Lookups> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read lookup file '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid lookup file '{}'", path.display()))
        }
        None => Ok(Lookups::builtin()),
    }
}

/// Log the first few records of each table, dry-run style
fn preview(book: &RecipeBook) {
    const PREVIEW_ROWS: usize = 5;

    info!("First {} rows of dish:", PREVIEW_ROWS);
    for dish in book.dishes.iter().take(PREVIEW_ROWS) {
        info!("  {:?}", dish);
    }

    info!("First {} rows of dish_ingredient:", PREVIEW_ROWS);
    for link in book.ingredient_links.iter().take(PREVIEW_ROWS) {
        info!("  {:?}", link);
    }

    info!("First {} rows of ingredient_cost:", PREVIEW_ROWS);
    for cost in book.ingredient_costs.iter().take(PREVIEW_ROWS) {
        info!("  {:?}", cost);
    }

    info!(
        "Loaded {} dishes, {} ingredient links, {} ingredient costs",
        book.dishes.len(),
        book.ingredient_links.len(),
        book.ingredient_costs.len()
    );
}
