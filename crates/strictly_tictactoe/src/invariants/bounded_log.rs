//! Bounded log invariant: the log fits on the board.

use super::super::GameView;
use super::Invariant;

/// Invariant: The log never outgrows the board and every move lies on it.
pub struct BoundedLogInvariant;

impl Invariant<GameView<'_>> for BoundedLogInvariant {
    fn holds(view: &GameView<'_>) -> bool {
        let dimensions = view.rules().dimensions();
        view.log().len() <= dimensions.total_cells()
            && view.log().iter().all(|action| dimensions.contains(action.coord()))
    }

    fn description() -> &'static str {
        "Log length is at most rows x columns and every move is on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, MoveLog, Rules, Symbol};

    #[test]
    fn test_on_board_moves_hold() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![Move::new(Symbol::X, 2, 2)]);
        assert!(BoundedLogInvariant::holds(&GameView::new(&log, &rules)));
    }

    #[test]
    fn test_off_board_move_violates() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 3)]);
        assert!(!BoundedLogInvariant::holds(&GameView::new(&log, &rules)));
    }

    #[test]
    fn test_overlong_log_violates() {
        let rules = Rules::n_in_a_row(1, 2, 2).unwrap();
        let log = MoveLog::from_moves(vec![
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::O, 0, 1),
            Move::new(Symbol::X, 0, 0),
        ]);
        assert!(!BoundedLogInvariant::holds(&GameView::new(&log, &rules)));
    }
}
