//! Contract-based move validation.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions check the log against the engine invariants
//! and then apply the user-facing rejection rules; postconditions re-check
//! the invariants after a move is applied.

use super::action::MoveError;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::{Board, Coord, MoveLog, Rules, derive_board, derive_outcome};
use tracing::{instrument, warn};

/// Borrowed view of a game: a move log under a fixed set of rules.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    log: &'a MoveLog,
    rules: &'a Rules,
}

impl<'a> GameView<'a> {
    /// Creates a view.
    pub fn new(log: &'a MoveLog, rules: &'a Rules) -> Self {
        Self { log, rules }
    }

    /// The move log.
    pub fn log(&self) -> &'a MoveLog {
        self.log
    }

    /// The rules the log is played under.
    pub fn rules(&self) -> &'a Rules {
        self.rules
    }
}

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

fn violated(violations: Vec<InvariantViolation>, context: &str) -> MoveError {
    let descriptions = violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    warn!(%descriptions, context, "Invariant check failed");
    MoveError::Invariant(InvariantViolation::new(format!(
        "{}: {}",
        context, descriptions
    )))
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The log replays cleanly and satisfies every
/// [`EngineInvariants`] member.
pub struct LogIsConsistent;

impl LogIsConsistent {
    /// Derives the board, rejecting logs not built through the move contract.
    pub fn check(view: &GameView<'_>) -> Result<Board, MoveError> {
        let board = derive_board(view.log(), view.rules().dimensions())?;
        EngineInvariants::check_all(view).map_err(|v| violated(v, "Precondition failed"))?;
        Ok(board)
    }
}

/// Precondition: The target cell lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects off-board coordinates.
    pub fn check(coord: Coord, rules: &Rules) -> Result<(), MoveError> {
        if rules.dimensions().contains(coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                row: coord.row,
                column: coord.column,
            })
        }
    }
}

/// Precondition: The game has not reached a terminal outcome.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the board is won or drawn.
    pub fn check(board: &Board, rules: &Rules) -> Result<(), MoveError> {
        let outcome = derive_outcome(board, rules.patterns(), rules.total_cells());
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell is unclaimed.
pub struct CellIsVacant;

impl CellIsVacant {
    /// Rejects moves onto claimed cells.
    pub fn check(coord: Coord, board: &Board) -> Result<(), MoveError> {
        if board.is_vacant(coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: coord.row,
                column: coord.column,
            })
        }
    }
}

/// Composite precondition, checked in order: log consistency, game not
/// over, bounds, cell vacant.
///
/// A finished game rejects every coordinate with `GameOver`, on the board
/// or not.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the board they were checked on.
    #[instrument(skip(view))]
    pub fn check(coord: Coord, view: &GameView<'_>) -> Result<Board, MoveError> {
        let board = LogIsConsistent::check(view)?;
        GameNotOver::check(&board, view.rules())?;
        InBounds::check(coord, view.rules())?;
        CellIsVacant::check(coord, &board)?;
        Ok(board)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for submitting a move.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - The new log is the old log plus exactly one move
/// - Every [`EngineInvariants`] member holds
pub struct MoveContract;

impl<'a> Contract<GameView<'a>, Coord> for MoveContract {
    fn pre(view: &GameView<'a>, coord: &Coord) -> Result<(), MoveError> {
        LegalMove::check(*coord, view).map(|_| ())
    }

    fn post(before: &GameView<'a>, after: &GameView<'a>) -> Result<(), MoveError> {
        let previous = before.log().moves();
        let current = after.log().moves();
        if current.len() != previous.len() + 1 || !current.starts_with(previous) {
            warn!(
                before = previous.len(),
                after = current.len(),
                "Move log was not extended by exactly one move"
            );
            return Err(MoveError::Invariant(InvariantViolation::new(
                "Move log must grow by exactly one appended move",
            )));
        }

        EngineInvariants::check_all(after).map_err(|v| violated(v, "Postcondition failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Symbol};

    #[test]
    fn test_precondition_vacant_cell() {
        let rules = Rules::classic();
        let log = MoveLog::new();
        assert!(MoveContract::pre(&GameView::new(&log, &rules), &Coord::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_log_consistency_checked_first() {
        let rules = Rules::classic();
        // Corrupt log: the conflict is reported before the bad coordinate.
        let log = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 0), Move::new(Symbol::O, 0, 0)]);
        let err = MoveContract::pre(&GameView::new(&log, &rules), &Coord::new(5, 0)).unwrap_err();
        assert!(matches!(err, MoveError::Invariant(_)));
    }

    #[test]
    fn test_precondition_out_of_turn_log() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![Move::new(Symbol::O, 0, 0)]);
        let err = MoveContract::pre(&GameView::new(&log, &rules), &Coord::new(1, 1)).unwrap_err();
        assert!(!err.is_rejection());
        assert!(err.to_string().contains("Precondition failed"));
    }

    #[test]
    fn test_precondition_game_over_before_bounds() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::O, 1, 1),
            Move::new(Symbol::X, 0, 1),
            Move::new(Symbol::O, 1, 0),
            Move::new(Symbol::X, 0, 2),
        ]);
        assert!(matches!(
            MoveContract::pre(&GameView::new(&log, &rules), &Coord::new(3, 3)),
            Err(MoveError::GameOver(_))
        ));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![Move::new(Symbol::X, 1, 1)]);
        assert_eq!(
            MoveContract::pre(&GameView::new(&log, &rules), &Coord::new(1, 1)),
            Err(MoveError::CellOccupied { row: 1, column: 1 })
        );
    }

    #[test]
    fn test_precondition_conflicting_log() {
        let rules = Rules::classic();
        let log = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 0), Move::new(Symbol::O, 0, 0)]);
        let err = MoveContract::pre(&GameView::new(&log, &rules), &Coord::new(2, 2)).unwrap_err();
        assert!(!err.is_rejection());
    }

    #[test]
    fn test_postcondition_detects_rewritten_history() {
        let rules = Rules::classic();
        let before = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 0)]);
        let after = MoveLog::from_moves(vec![Move::new(Symbol::X, 2, 2), Move::new(Symbol::O, 1, 1)]);
        assert!(
            MoveContract::post(&GameView::new(&before, &rules), &GameView::new(&after, &rules)).is_err()
        );
    }

    #[test]
    fn test_postcondition_detects_turn_corruption() {
        let rules = Rules::classic();
        let before = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 0)]);
        let after = MoveLog::from_moves(vec![Move::new(Symbol::X, 0, 0), Move::new(Symbol::X, 1, 1)]);
        let err =
            MoveContract::post(&GameView::new(&before, &rules), &GameView::new(&after, &rules)).unwrap_err();
        assert!(err.to_string().contains("alternate"));
    }
}
