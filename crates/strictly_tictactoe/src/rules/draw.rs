//! Outcome derivation, including draw detection.

use super::super::{Board, Outcome};
use super::win::{WinPatterns, check_winner};
use tracing::{debug, instrument};

/// Derives the outcome of a board.
///
/// The first complete pattern in declaration order wins. Without a winner,
/// a board holding `total_cells` symbols is a draw; anything else is still
/// in progress.
#[instrument(skip(board, patterns))]
pub fn derive_outcome(board: &Board, patterns: &WinPatterns, total_cells: usize) -> Outcome {
    let outcome = match check_winner(board, patterns) {
        Some(winner) => Outcome::Win(winner),
        None if board.occupied_count() == total_cells => Outcome::Draw,
        None => Outcome::InProgress,
    };
    debug!(%outcome, "Derived outcome");
    outcome
}
