//! Strictly Tic-Tac-Toe - pure N-in-a-row grid game logic.
//!
//! The engine keeps one authoritative, append-only [`MoveLog`] and derives
//! everything else from it on demand: the [`Board`], the [`active_player`]
//! and the [`Outcome`]. Moves enter the log only through [`submit_move`],
//! which validates them against the move contract and returns a new log.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, Outcome, Symbol};
//!
//! let mut game = Game::classic();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.submit_move(row, column)?;
//! }
//! assert_eq!(game.submit_move(0, 2)?, Outcome::Win(Symbol::X));
//! assert!(game.submit_move(2, 2).is_err());
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod game;
mod move_log;
mod outcome;
mod registry;
mod rules;
mod types;

pub mod invariants;

pub use action::{Move, MoveError};
pub use board::Board;
pub use contracts::{
    CellIsVacant, Contract, GameNotOver, GameView, InBounds, LegalMove, LogIsConsistent,
    MoveContract,
};
pub use engine::{
    active_player, derive_board, is_legal, legal_moves, rematch, rename_player, submit_move,
};
pub use game::{Game, GameSnapshot};
pub use invariants::InvariantViolation;
pub use move_log::MoveLog;
pub use outcome::Outcome;
pub use registry::PlayerRegistry;
pub use rules::{Rules, WinPattern, WinPatterns, check_winner, derive_outcome, winning_line};
pub use types::{Coord, DimensionError, Dimensions, MAX_SIDE, Symbol};
