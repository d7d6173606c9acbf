//! First-class invariants over a move log.
//!
//! Invariants are logical properties that must hold throughout play. They are
//! testable independently and double as documentation of engine guarantees.

pub mod alternating_turn;
pub mod bounded_log;
pub mod unique_cells;

pub use alternating_turn::AlternatingTurnInvariant;
pub use bounded_log::BoundedLogInvariant;
pub use unique_cells::UniqueCellsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
///
/// Also reported when a log replays into a conflicting board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every engine invariant as a composable set.
pub type EngineInvariants = (
    AlternatingTurnInvariant,
    UniqueCellsInvariant,
    BoundedLogInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameView, Move, MoveLog, Rules, Symbol, submit_move};

    #[test]
    fn test_invariant_set_holds_for_empty_log() {
        let rules = Rules::classic();
        let log = MoveLog::new();
        assert!(EngineInvariants::check_all(&GameView::new(&log, &rules)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let rules = Rules::classic();
        let log = submit_move(&MoveLog::new(), &rules, 0, 0).unwrap();
        let log = submit_move(&log, &rules, 1, 1).unwrap();
        assert!(EngineInvariants::check_all(&GameView::new(&log, &rules)).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let rules = Rules::classic();
        // Same player twice on the same cell.
        let log = MoveLog::from_moves(vec![
            Move::new(Symbol::X, 0, 0),
            Move::new(Symbol::X, 0, 0),
        ]);
        let violations = EngineInvariants::check_all(&GameView::new(&log, &rules)).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let rules = Rules::classic();
        let log = MoveLog::new();
        type TwoInvariants = (AlternatingTurnInvariant, UniqueCellsInvariant);
        assert!(TwoInvariants::check_all(&GameView::new(&log, &rules)).is_ok());
    }
}
