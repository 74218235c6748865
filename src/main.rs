//! Rewind Games - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{AppConfig, Cli, Command, init_stderr_logging, run_replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Play => run_tui(&config),
        Command::Replay { moves, at, json } => {
            init_stderr_logging(config.log_level());
            info!("Running replay");
            let output = run_replay(&moves, at, json, &config)?;
            println!("{}", output);
            Ok(())
        }
    }
}
