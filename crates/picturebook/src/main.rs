//! Picturebook CLI binary.
//!
//! - Write a new story, stage by stage, with approval at every step
//! - Illustrate a saved storyboard
//! - Print a saved storyboard

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, illustrate_storyboard, show_storyboard, write_story};

    // Load .env before reading configuration or API keys
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    picturebook::init_logging(&picturebook::LoggingConfig {
        verbose: cli.verbose,
        json_logs: cli.json_logs,
    })?;

    let config = cli.load_config()?;

    match cli.command {
        Commands::Write { illustrate } => {
            write_story(&config, illustrate).await?;
        }

        Commands::Illustrate { id } => {
            illustrate_storyboard(&config, &id).await?;
        }

        Commands::Show { id } => {
            show_storyboard(&config, &id).await?;
        }
    }

    Ok(())
}
