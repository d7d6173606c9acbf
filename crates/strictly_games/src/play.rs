//! Line-oriented terminal play loop.

use crate::session::{SessionError, SessionManager};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_tictactoe::{GameSnapshot, Outcome, Symbol};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>          claim a cell (zero-based), same as `move <row> <col>`
  rename <X|O> <name>  change a player's display name
  rematch              clear the board, keep the names
  history              list the moves played so far
  board                show the board again
  json                 print the game state as JSON
  help                 show this help
  quit                 leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Claim a cell for the active player.
    Move {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        column: usize,
    },
    /// Change a display name.
    Rename {
        /// Player to rename.
        symbol: Symbol,
        /// New name; blank restores the default.
        name: String,
    },
    /// Clear the board.
    Rematch,
    /// List moves played.
    History,
    /// Show the board.
    Board,
    /// Print the snapshot as JSON.
    Json,
    /// Show the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", message)]
pub struct ParseCommandError {
    /// What was wrong with the line.
    pub message: String,
}

impl ParseCommandError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::error::Error for ParseCommandError {}

fn parse_index(word: Option<&str>, what: &str) -> Result<usize, ParseCommandError> {
    let word = word.ok_or_else(|| ParseCommandError::new(format!("Missing {}", what)))?;
    word.parse()
        .map_err(|_| ParseCommandError::new(format!("Invalid {}: {}", what, word)))
}

impl FromStr for PlayCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words
            .next()
            .ok_or_else(|| ParseCommandError::new("Empty command"))?;

        let command = match first.to_lowercase().as_str() {
            "move" | "m" => PlayCommand::Move {
                row: parse_index(words.next(), "row")?,
                column: parse_index(words.next(), "column")?,
            },
            "rename" => {
                let symbol = words
                    .next()
                    .ok_or_else(|| ParseCommandError::new("Missing player (X or O)"))?;
                let symbol = Symbol::from_str(symbol)
                    .map_err(|_| ParseCommandError::new(format!("Unknown player: {}", symbol)))?;
                PlayCommand::Rename {
                    symbol,
                    name: words.by_ref().collect::<Vec<_>>().join(" "),
                }
            }
            "rematch" | "r" => PlayCommand::Rematch,
            "history" | "h" => PlayCommand::History,
            "board" | "b" => PlayCommand::Board,
            "json" => PlayCommand::Json,
            "help" | "?" => PlayCommand::Help,
            "quit" | "exit" | "q" => PlayCommand::Quit,
            _ if first.chars().all(|c| c.is_ascii_digit()) => PlayCommand::Move {
                row: parse_index(Some(first), "row")?,
                column: parse_index(words.next(), "column")?,
            },
            other => return Err(ParseCommandError::new(format!("Unknown command: {}", other))),
        };

        if matches!(command, PlayCommand::Move { .. }) && words.next().is_some() {
            return Err(ParseCommandError::new("Too many coordinates"));
        }
        Ok(command)
    }
}

/// One-line description of whose turn it is or how the game ended.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    let players = snapshot.players();
    match snapshot.outcome() {
        Outcome::InProgress => match snapshot.to_move() {
            Some(symbol) => format!("{} ({}) to move", symbol, players.name(*symbol)),
            None => "Waiting".to_string(),
        },
        Outcome::Win(symbol) => format!(
            "{} ({}) wins! Type `rematch` to play again.",
            players.name(*symbol),
            symbol
        ),
        Outcome::Draw => "Draw. Type `rematch` to play again.".to_string(),
    }
}

fn show<W: Write>(output: &mut W, snapshot: &GameSnapshot) -> std::io::Result<()> {
    writeln!(output, "{}", snapshot.rendered())?;
    writeln!(output, "{}", status_line(snapshot))
}

fn show_history<W: Write>(output: &mut W, snapshot: &GameSnapshot) -> std::io::Result<()> {
    if snapshot.history().is_empty() {
        return writeln!(output, "No moves yet.");
    }
    for (turn, action) in snapshot.history().iter().enumerate() {
        writeln!(
            output,
            "{:>2}. {} ({}) -> {}",
            turn + 1,
            action.player(),
            snapshot.players().name(action.player()),
            action.coord()
        )?;
    }
    Ok(())
}

/// Runs the play loop for one session until `quit` or end of input.
///
/// Rejected moves are reported and the loop continues. Only internal
/// failures (corrupt log, poisoned lock, I/O) end the loop with an error.
#[instrument(skip(manager, input, output))]
pub fn run_session<R: BufRead, W: Write>(
    manager: &SessionManager,
    session_id: &str,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    show(output, &manager.snapshot(session_id)?)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<PlayCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{} (type `help` for commands)", e)?;
                continue;
            }
        };
        debug!(?command, "Parsed command");

        match command {
            PlayCommand::Move { row, column } => {
                match manager.submit_move(session_id, row, column) {
                    Ok(_) => show(output, &manager.snapshot(session_id)?)?,
                    Err(SessionError::Move(e)) if e.is_rejection() => {
                        writeln!(output, "Rejected: {}", e)?;
                    }
                    Err(e) => {
                        warn!(error = %e, "Session failed");
                        return Err(e.into());
                    }
                }
            }
            PlayCommand::Rename { symbol, name } => {
                manager.rename_player(session_id, symbol, &name)?;
                let snapshot = manager.snapshot(session_id)?;
                writeln!(output, "{} is now {}", symbol, snapshot.players().name(symbol))?;
            }
            PlayCommand::Rematch => {
                manager.rematch(session_id)?;
                show(output, &manager.snapshot(session_id)?)?;
            }
            PlayCommand::History => show_history(output, &manager.snapshot(session_id)?)?,
            PlayCommand::Board => show(output, &manager.snapshot(session_id)?)?,
            PlayCommand::Json => {
                let snapshot = manager.snapshot(session_id)?;
                writeln!(output, "{}", serde_json::to_string_pretty(&snapshot)?)?;
            }
            PlayCommand::Help => writeln!(output, "{}", HELP)?,
            PlayCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_coordinates() {
        assert_eq!("1 2".parse(), Ok(PlayCommand::Move { row: 1, column: 2 }));
        assert_eq!("move 0 0".parse(), Ok(PlayCommand::Move { row: 0, column: 0 }));
    }

    #[test]
    fn test_parse_rename_keeps_spaces() {
        assert_eq!(
            "rename o Ada Lovelace".parse(),
            Ok(PlayCommand::Rename {
                symbol: Symbol::O,
                name: "Ada Lovelace".to_string()
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("move 1".parse::<PlayCommand>().is_err());
        assert!("1 2 3".parse::<PlayCommand>().is_err());
        assert!("rename Z Bob".parse::<PlayCommand>().is_err());
        assert!("dance".parse::<PlayCommand>().is_err());
        assert!("move -1 0".parse::<PlayCommand>().is_err());
    }
}
