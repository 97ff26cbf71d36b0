//! CLI command definitions.

use clap::{Parser, Subcommand};
use picturebook::{PicturebookConfig, PicturebookResult};
use std::path::PathBuf;

/// Picturebook - co-author illustrated children's stories with an LLM assistant
#[derive(Parser, Debug)]
#[command(name = "picturebook")]
#[command(about = "Co-author illustrated children's stories with an LLM assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Configuration from `--config`, or from the default locations.
    pub fn load_config(&self) -> PicturebookResult<PicturebookConfig> {
        match &self.config {
            Some(path) => PicturebookConfig::from_file(path),
            None => PicturebookConfig::load(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a new story: outline, story, then storyboard
    Write {
        /// Illustrate every page once the storyboard is saved
        #[arg(long)]
        illustrate: bool,
    },

    /// Generate illustrations for a saved storyboard
    Illustrate {
        /// Storyboard identifier printed by `write`
        id: String,
    },

    /// Print a saved storyboard
    Show {
        /// Storyboard identifier printed by `write`
        id: String,
    },
}
