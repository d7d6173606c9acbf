//! Strictly Games - CLI
//!
//! Plays or replays grid games against the strictly_tictactoe engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use std::path::PathBuf;
use strictly_games::{GameConfig, SessionManager, load_history, replay, run_session, status_line};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const LOCAL_SESSION: &str = "local";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { config, board } => run_play(config, board),
        Command::Replay {
            history,
            config,
            board,
            json,
        } => run_replay(history, config, board, json),
    }
}

/// Loads the config file (if any) and applies command-line overrides.
#[instrument]
fn load_config(path: Option<PathBuf>, board: BoardArgs) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::new(),
    };
    Ok(config.with_overrides(board.rows, board.columns, board.run))
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, board: BoardArgs) -> Result<()> {
    let config = load_config(config, board)?;
    let manager = SessionManager::new();
    manager.create_session(LOCAL_SESSION.to_string(), config.new_game()?)?;
    info!("Starting local game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(&manager, LOCAL_SESSION, stdin.lock(), &mut stdout)
}

/// Replay a recorded history
#[instrument]
fn run_replay(history: PathBuf, config: Option<PathBuf>, board: BoardArgs, json: bool) -> Result<()> {
    let config = load_config(config, board)?;
    let mut game = config.new_game()?;
    let moves = load_history(&history)?;
    let snapshot = replay(&mut game, &moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.rendered());
        println!("{}", status_line(&snapshot));
    }
    Ok(())
}
