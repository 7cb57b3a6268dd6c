//! Skillforge - Entry Point
//!
//! Generates the skill/ability tree once, writes it to the game's asset
//! directory, and prints a summary.

use std::path::Path;

use anyhow::{Context, Result};

use skillforge::export::{self, ContentStats, DEFAULT_OUTPUT_DIR};
use skillforge::{ContentGenerator, DataManager};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Skillforge v{}", env!("CARGO_PKG_VERSION"));

    // A failure is reported once, by anyhow, when main returns
    run()
}

fn run() -> Result<()> {
    let data = DataManager::new();
    match data.seed() {
        Some(seed) => log::info!("Using fixed seed {}", seed),
        None => log::info!("Using entropy seed"),
    }

    let table = data.tier_table().clone();
    let mut generator = ContentGenerator::new(data.generation);
    let content = generator.generate();
    content
        .verify_links()
        .context("Generated content has broken skill/ability links")?;

    let output_dir = Path::new(DEFAULT_OUTPUT_DIR);
    let paths = export::write_content(output_dir, &content)
        .with_context(|| format!("Failed to write progression data to {}", output_dir.display()))?;

    println!("Saved {} skills to {}", content.skills.len(), paths.skills.display());
    println!("Saved {} abilities to {}", content.abilities.len(), paths.abilities.display());
    println!();
    print!("{}", ContentStats::compute(&content, &table));
    println!();
    println!("Files saved to: {}", output_dir.display());

    Ok(())
}
