//! Derived board grid.

use super::action::Move;
use super::invariants::InvariantViolation;
use super::types::{Coord, Dimensions, Symbol};
use serde::Serialize;

/// A `rows x columns` grid of claimed cells.
///
/// Boards are views: the engine rebuilds them by replaying a move log and
/// never treats them as authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    dimensions: Dimensions,
    /// Cells in row-major order.
    cells: Vec<Option<Symbol>>,
}

impl Board {
    /// Creates an empty board.
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.total_cells()],
        }
    }

    /// Board size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Symbol at a cell; `None` for empty or off-board cells.
    pub fn get(&self, row: usize, column: usize) -> Option<Symbol> {
        self.at(Coord::new(row, column))
    }

    /// Symbol at a coordinate; `None` for empty or off-board cells.
    pub fn at(&self, coord: Coord) -> Option<Symbol> {
        self.dimensions
            .index(coord)
            .and_then(|index| self.cells[index])
    }

    /// Returns true if the cell is on the board and unclaimed.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        matches!(self.dimensions.index(coord), Some(index) if self.cells[index].is_none())
    }

    /// Number of claimed cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns true when every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Unclaimed cells in row-major order.
    pub fn vacant_cells(&self) -> Vec<Coord> {
        self.dimensions
            .coords()
            .filter(|coord| self.is_vacant(*coord))
            .collect()
    }

    /// Rows of the grid, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Symbol>]> {
        self.cells.chunks(self.dimensions.columns())
    }

    /// Claims the move's cell.
    ///
    /// # Errors
    ///
    /// Fails if the cell is off the board or already claimed, both of which
    /// mean the log was not built through the move contract.
    pub(crate) fn place(&mut self, action: &Move) -> Result<(), InvariantViolation> {
        let index = self.dimensions.index(action.coord()).ok_or_else(|| {
            InvariantViolation::new(format!(
                "Move {} lies outside the {} board",
                action, self.dimensions
            ))
        })?;

        if let Some(holder) = self.cells[index] {
            return Err(InvariantViolation::new(format!(
                "Move {} targets a cell already held by {}",
                action, holder
            )));
        }

        self.cells[index] = Some(action.player());
        Ok(())
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let separator = vec!["-"; self.dimensions.columns()].join("+");
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(symbol) => symbol.to_string(),
                        None => ".".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_vacant() {
        let board = Board::empty(Dimensions::CLASSIC);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.vacant_cells().len(), 9);
    }

    #[test]
    fn test_place_rejects_second_claim() {
        let mut board = Board::empty(Dimensions::CLASSIC);
        board.place(&Move::new(Symbol::X, 1, 1)).unwrap();
        assert_eq!(board.get(1, 1), Some(Symbol::X));

        let err = board.place(&Move::new(Symbol::O, 1, 1)).unwrap_err();
        assert!(err.description.contains("already held by X"));
        assert_eq!(board.get(1, 1), Some(Symbol::X));
    }

    #[test]
    fn test_place_rejects_off_board() {
        let mut board = Board::empty(Dimensions::CLASSIC);
        assert!(board.place(&Move::new(Symbol::X, 3, 0)).is_err());
        assert_eq!(board.get(3, 0), None);
    }

    #[test]
    fn test_render_grid() {
        let mut board = Board::empty(Dimensions::CLASSIC);
        board.place(&Move::new(Symbol::X, 0, 0)).unwrap();
        board.place(&Move::new(Symbol::O, 2, 1)).unwrap();
        assert_eq!(board.render(), "X|.|.\n-+-+-\n.|.|.\n-+-+-\n.|O|.");
    }
}
