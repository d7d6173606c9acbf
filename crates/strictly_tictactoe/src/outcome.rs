//! Derived game outcome.

use super::types::Symbol;
use serde::{Deserialize, Serialize};

/// Status of a game, always derived from the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a win pattern.
    Win(Symbol),
    /// Every cell is filled and nobody completed a pattern.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Win(symbol) => Some(*symbol),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game no longer accepts moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(symbol) => write!(f, "Player {} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
