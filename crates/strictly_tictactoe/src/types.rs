//! Core domain types: symbols, coordinates and board dimensions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest supported side length. The engine targets small boards.
pub const MAX_SIDE: usize = 10;

/// Marker identifying which player claimed a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Player X (always opens).
    X,
    /// Player O (goes second).
    O,
}

impl Symbol {
    /// The symbol that makes the first move of every game.
    pub const FIRST: Symbol = Symbol::X;

    /// Returns the opponent symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// Zero-based `(row, column)` coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top row is 0.
    pub row: usize,
    /// Column index, left column is 0.
    pub column: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Board size, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    /// The classic 3x3 board.
    pub const CLASSIC: Dimensions = Dimensions {
        rows: 3,
        columns: 3,
    };

    /// Creates validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::SideOutOfRange`] unless both sides lie in
    /// `1..=MAX_SIDE`.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Result<Self, DimensionError> {
        let valid = |side: usize| (1..=MAX_SIDE).contains(&side);
        if !valid(rows) || !valid(columns) {
            return Err(DimensionError::SideOutOfRange { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    /// Row-major index of a coordinate, if it lies on the board.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.columns + coord.column)
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |column| Coord::new(row, column)))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Error building board dimensions or win patterns.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DimensionError {
    /// A side is zero or larger than [`MAX_SIDE`].
    #[display("Board sides must be between 1 and {}, got {}x{}", MAX_SIDE, rows, columns)]
    SideOutOfRange {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        columns: usize,
    },

    /// The run length cannot fit on the board.
    #[display("Run length {} does not fit a {} board", run_length, dimensions)]
    RunLength {
        /// Requested run length.
        run_length: usize,
        /// Board it was requested for.
        dimensions: Dimensions,
    },

    /// A custom pattern is empty or references a cell outside the board.
    #[display("Win pattern #{} is empty or leaves the {} board", index, dimensions)]
    InvalidPattern {
        /// Index of the offending pattern.
        index: usize,
        /// Board it was checked against.
        dimensions: Dimensions,
    },
}

impl std::error::Error for DimensionError {}
