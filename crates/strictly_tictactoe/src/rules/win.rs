//! Win detection.

use super::super::{Board, Coord, DimensionError, Dimensions, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// A set of cells that wins when a single symbol claims all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WinPattern {
    cells: Vec<Coord>,
}

impl WinPattern {
    /// The cells making up this pattern.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Returns true if the pattern includes the coordinate.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// The symbol holding every cell of the pattern, if any.
    pub fn claimed_by(&self, board: &Board) -> Option<Symbol> {
        let (first, rest) = self.cells.split_first()?;
        let symbol = board.at(*first)?;
        rest.iter()
            .all(|coord| board.at(*coord) == Some(symbol))
            .then_some(symbol)
    }
}

/// Ordered win patterns for one board, fixed for the whole session.
///
/// Order matters: when several patterns are complete at once, the earliest
/// declared one decides the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WinPatterns {
    patterns: Vec<WinPattern>,
}

impl WinPatterns {
    /// The eight classic 3x3 lines: rows, columns, then both diagonals.
    pub fn classic() -> Self {
        Self::generate(Dimensions::CLASSIC, 3)
    }

    /// Every straight run of `run_length` cells on the board.
    ///
    /// Patterns are declared horizontal first, then vertical, then
    /// down-right diagonals, then down-left diagonals. Within a direction,
    /// start cells are scanned in row-major order.
    ///
    /// # Errors
    ///
    /// Fails when `run_length` is zero or longer than both sides.
    #[instrument]
    pub fn lines(dimensions: Dimensions, run_length: usize) -> Result<Self, DimensionError> {
        if run_length == 0 || run_length > dimensions.rows().max(dimensions.columns()) {
            return Err(DimensionError::RunLength {
                run_length,
                dimensions,
            });
        }
        Ok(Self::generate(dimensions, run_length))
    }

    /// Arbitrary patterns, checked against the board.
    ///
    /// # Errors
    ///
    /// Fails if a pattern is empty or references a cell off the board.
    #[instrument(skip(patterns))]
    pub fn custom(dimensions: Dimensions, patterns: Vec<Vec<Coord>>) -> Result<Self, DimensionError> {
        for (index, cells) in patterns.iter().enumerate() {
            if cells.is_empty() || !cells.iter().all(|coord| dimensions.contains(*coord)) {
                return Err(DimensionError::InvalidPattern { index, dimensions });
            }
        }
        Ok(Self {
            patterns: patterns
                .into_iter()
                .map(|cells| WinPattern { cells })
                .collect(),
        })
    }

    fn generate(dimensions: Dimensions, run_length: usize) -> Self {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        let rows = dimensions.rows() as isize;
        let columns = dimensions.columns() as isize;
        let mut patterns = Vec::new();

        for (index, (d_row, d_column)) in DIRECTIONS.into_iter().enumerate() {
            // A single cell is the same run in every direction.
            if run_length == 1 && index > 0 {
                break;
            }
            for start in dimensions.coords() {
                let cells: Option<Vec<Coord>> = (0..run_length as isize)
                    .map(|step| {
                        let row = start.row as isize + d_row * step;
                        let column = start.column as isize + d_column * step;
                        ((0..rows).contains(&row) && (0..columns).contains(&column))
                            .then(|| Coord::new(row as usize, column as usize))
                    })
                    .collect();
                if let Some(cells) = cells {
                    patterns.push(WinPattern { cells });
                }
            }
        }

        debug!(%dimensions, run_length, count = patterns.len(), "Generated win patterns");
        Self { patterns }
    }

    /// Iterates patterns in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, WinPattern> {
        self.patterns.iter()
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if there are no patterns (nobody can ever win).
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The first complete pattern in declaration order.
#[instrument(skip_all)]
pub fn winning_line<'p>(board: &Board, patterns: &'p WinPatterns) -> Option<&'p WinPattern> {
    patterns
        .iter()
        .find(|pattern| pattern.claimed_by(board).is_some())
}

/// Checks if any pattern is complete.
///
/// Returns the symbol of the earliest declared complete pattern.
#[instrument(skip_all)]
pub fn check_winner(board: &Board, patterns: &WinPatterns) -> Option<Symbol> {
    patterns.iter().find_map(|pattern| pattern.claimed_by(board))
}
