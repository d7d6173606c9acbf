//! Unique cells invariant: no cell is claimed twice.

use super::super::GameView;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: Every move in the log targets a distinct cell.
pub struct UniqueCellsInvariant;

impl Invariant<GameView<'_>> for UniqueCellsInvariant {
    fn holds(view: &GameView<'_>) -> bool {
        let mut seen = HashSet::with_capacity(view.log().len());
        view.log().iter().all(|action| seen.insert(action.coord()))
    }

    fn description() -> &'static str {
        "No two moves share a cell"
    }
}
