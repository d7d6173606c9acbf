//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameView, Symbol};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
pub struct AlternatingTurnInvariant;

impl Invariant<GameView<'_>> for AlternatingTurnInvariant {
    fn holds(view: &GameView<'_>) -> bool {
        let moves = view.log().moves();

        match moves.first() {
            None => true,
            Some(first) if first.player() != Symbol::FIRST => false,
            Some(_) => moves
                .windows(2)
                .all(|pair| pair[1].player() == pair[0].player().opponent()),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, MoveLog, Rules};

    #[test]
    fn test_empty_log_holds() {
        let rules = Rules::classic();
        let log = MoveLog::new();
        assert!(AlternatingTurnInvariant::holds(&GameView::new(&log, &rules)));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::O, 1, 1),
            Move::new(Symbol::X, 2, 2),
        ]);
        assert!(AlternatingTurnInvariant::holds(&GameView::new(&log, &rules)));
    }

    #[test]
    fn test_o_opening_violates() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![Move::new(Symbol::O, 0, 0)]);
        assert!(!AlternatingTurnInvariant::holds(&GameView::new(&log, &rules)));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::X, 1, 1),
        ]);
        assert!(!AlternatingTurnInvariant::holds(&GameView::new(&log, &rules)));
    }
}
