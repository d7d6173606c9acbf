//! First-class action types.
//!
//! Moves are domain events, not side effects. A move records who claimed
//! which cell; it is validated by the move contract before it ever reaches
//! a log.

use super::invariants::InvariantViolation;
use super::outcome::Outcome;
use super::types::{Coord, Symbol};
use serde::{Deserialize, Serialize};

/// A move: a player placing their symbol at a cell.
///
/// Moves are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    column: usize,
    player: Symbol,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Symbol, row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            player,
        }
    }

    /// Row of the claimed cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the claimed cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The player making this move.
    pub fn player(&self) -> Symbol {
        self.player
    }

    /// The claimed cell as a coordinate.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.column)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord())
    }
}

/// Why a move was not applied.
///
/// The first three variants are expected user-input rejections. The log is
/// left unchanged and the caller decides how to surface them.
/// [`MoveError::Invariant`] signals a corrupted log, which only happens when
/// something bypassed `submit_move`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates lie outside the board.
    #[display("Cell ({}, {}) is outside the board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The cell already holds a symbol.
    #[display("Cell ({}, {}) is already occupied", row, column)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The game already reached a terminal outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The move log is internally inconsistent.
    #[display("{}", _0)]
    Invariant(InvariantViolation),
}

impl MoveError {
    /// True for expected rejections, false for internal invariant failures.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, MoveError::Invariant(_))
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Invariant(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<InvariantViolation> for MoveError {
    fn from(violation: InvariantViolation) -> Self {
        MoveError::Invariant(violation)
    }
}
