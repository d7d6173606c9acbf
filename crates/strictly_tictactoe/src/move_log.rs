//! Append-only move history.

use super::action::Move;
use serde::{Deserialize, Serialize};

/// Chronological record of every move in a game, oldest first.
///
/// The log is the only authoritative game state; board and outcome are
/// derived from it. New moves are appended exclusively through
/// [`submit_move`](crate::submit_move), which returns a fresh log and leaves
/// the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a log from recorded moves without validating them.
    ///
    /// Conflicting entries surface as an invariant violation when the board
    /// is derived.
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The most recent move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Iterates moves oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns a copy of this log with one more move.
    pub(crate) fn appended(&self, action: Move) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(action);
        Self { moves }
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_appended_leaves_original_untouched() {
        let log = MoveLog::new();
        let next = log.appended(Move::new(Symbol::X, 1, 1));
        assert!(log.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next.last(), Some(&Move::new(Symbol::X, 1, 1)));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let log = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 2)]);
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"[{"row":0,"column":2,"player":"X"}]"#);
        let back: MoveLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
