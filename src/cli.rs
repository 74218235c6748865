//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind_games.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a move list and print the resulting game
    Replay {
        /// Cells to play in order, comma or space separated (0-8 or labels like "center")
        #[arg(short, long)]
        moves: String,

        /// Jump to this history position after replaying
        #[arg(long)]
        at: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the chosen command, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["rewind_games"]);
        assert_eq!(cli.command(), Command::Play);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::parse_from([
            "rewind_games",
            "replay",
            "--moves",
            "4,0,8",
            "--at",
            "1",
            "--json",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: "4,0,8".to_string(),
                at: Some(1),
                json: true,
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
