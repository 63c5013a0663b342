//! CLI for winstall.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use winstall_core::config::{self, CleanupPolicy};

use commands::{run_checksum, run_install};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "winstall")]
#[command(about = "Fetch, verify, and silently run a Windows installer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the configured installer, verify its checksum, and run it
    /// silently.
    Install {
        /// Leave the downloaded installer on disk instead of deleting it.
        #[arg(long)]
        keep: bool,
    },

    /// Compute SHA-256 of a local file.
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Install { keep } => {
                let mut cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                if keep {
                    cfg.cleanup = CleanupPolicy::Never;
                }
                run_install(cfg)?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
