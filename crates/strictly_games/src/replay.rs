//! Replaying a recorded move history.
//!
//! A history file is a JSON array of coordinates:
//!
//! ```json
//! [{ "row": 0, "column": 0 }, { "row": 1, "column": 1 }]
//! ```
//!
//! Players are never read from the file. Every coordinate is submitted
//! through the engine, which attributes it to the active player.

use std::path::Path;
use strictly_tictactoe::{Coord, Game, GameSnapshot, InvariantViolation, MoveError};
use tracing::{info, instrument, warn};

/// Failure loading or replaying a history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// The file could not be read or parsed.
    #[display("Failed to load history: {}", _0)]
    Load(String),

    /// A move in the history was refused.
    #[display("Move #{} {} was refused: {}", index, coord, error)]
    Rejected {
        /// Zero-based position in the history.
        index: usize,
        /// The refused coordinate.
        coord: Coord,
        /// Why it was refused.
        error: MoveError,
    },

    /// The resulting game could not be rendered.
    #[display("{}", _0)]
    Invariant(InvariantViolation),
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Rejected { error, .. } => Some(error),
            ReplayError::Invariant(e) => Some(e),
            ReplayError::Load(_) => None,
        }
    }
}

/// Parses a JSON history.
pub fn parse_history(json: &str) -> Result<Vec<Coord>, ReplayError> {
    serde_json::from_str(json).map_err(|e| ReplayError::Load(e.to_string()))
}

/// Reads a JSON history file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<Coord>, ReplayError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ReplayError::Load(format!("{}: {}", path.as_ref().display(), e)))?;
    parse_history(&content)
}

/// Submits each coordinate in order and returns the final snapshot.
///
/// Stops at the first refused move; the game keeps every move accepted
/// before it.
#[instrument(skip(game, history), fields(moves = history.len()))]
pub fn replay(game: &mut Game, history: &[Coord]) -> Result<GameSnapshot, ReplayError> {
    for (index, coord) in history.iter().enumerate() {
        if let Err(error) = game.submit_move(coord.row, coord.column) {
            warn!(index, %coord, %error, "Replay stopped");
            return Err(ReplayError::Rejected {
                index,
                coord: *coord,
                error,
            });
        }
    }

    let snapshot = game.snapshot().map_err(ReplayError::Invariant)?;
    info!(outcome = %snapshot.outcome(), "Replay finished");
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Outcome, Symbol};

    #[test]
    fn test_replay_to_win() {
        let history = parse_history(
            r#"[{"row":0,"column":0},{"row":1,"column":1},{"row":0,"column":1},
                {"row":1,"column":0},{"row":0,"column":2}]"#,
        )
        .unwrap();
        let mut game = Game::classic();
        let snapshot = replay(&mut game, &history).unwrap();
        assert_eq!(*snapshot.outcome(), Outcome::Win(Symbol::X));
    }

    #[test]
    fn test_replay_reports_first_refused_move() {
        let history = vec![Coord::new(0, 0), Coord::new(0, 0), Coord::new(2, 2)];
        let mut game = Game::classic();
        let err = replay(&mut game, &history).unwrap_err();
        assert_eq!(
            err,
            ReplayError::Rejected {
                index: 1,
                coord: Coord::new(0, 0),
                error: MoveError::CellOccupied { row: 0, column: 0 },
            }
        );
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn test_refused_move_exposes_its_cause() {
        use std::error::Error;

        let history = vec![Coord::new(1, 1), Coord::new(1, 1)];
        let err = replay(&mut Game::classic(), &history).unwrap_err();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), MoveError::CellOccupied { row: 1, column: 1 }.to_string());
        assert!(ReplayError::Load("missing".to_string()).source().is_none());
    }

    #[test]
    fn test_malformed_history() {
        assert!(matches!(parse_history("[{\"row\": 1}]"), Err(ReplayError::Load(_))));
    }
}
