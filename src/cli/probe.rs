//! CLI entry-point for the model-load sanity check.

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::{batch::TextProcessor, config::Settings};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let processor = TextProcessor::load(&settings).await?;
    processor.probe().context("health probe")?;
    info!("both models answered the probe");
    println!("healthy");
    Ok(())
}
