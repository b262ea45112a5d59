//! Command-line interface wiring for onco-text.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod probe;
pub mod process;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Cancer text classification and extraction", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Process(args) => process::run(args, settings).await,
            Commands::Probe => probe::run(settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON API.
    Serve(serve::Args),
    /// Classify and extract over texts, printing JSON results.
    Process(process::Args),
    /// Run the model-load sanity check.
    Probe,
}
