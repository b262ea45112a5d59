//! CLI entry-point for one-off batch processing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{batch::TextProcessor, config::Settings};

/// Args for the `process` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Texts to process.
    pub texts: Vec<String>,
    /// Read additional texts from a file, one per line.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut texts = args.texts;
    if let Some(path) = &args.file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading texts from {}", path.display()))?;
        texts.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    anyhow::ensure!(!texts.is_empty(), "no texts given; pass arguments or --file");

    let processor = TextProcessor::load(&settings).await?;
    let results = processor.process(&texts);
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
