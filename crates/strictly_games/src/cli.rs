//! Command-line interface for strictly_games.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - turn-based grid games in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play or replay N-in-a-row grid games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board overrides
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Replay a JSON move history and print the result
    Replay {
        /// JSON file with an array of {"row", "column"} objects
        history: PathBuf,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board overrides
        #[command(flatten)]
        board: BoardArgs,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

/// Board settings that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Number of rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Symbols in a row needed to win
    #[arg(long)]
    pub run: Option<usize>,
}
