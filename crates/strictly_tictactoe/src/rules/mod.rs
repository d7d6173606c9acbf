//! Game rules.
//!
//! Pure functions evaluating a board against a fixed set of win patterns.
//! Rules are separated from board storage so the move contract can compose
//! them.

pub mod draw;
pub mod win;

pub use draw::derive_outcome;
pub use win::{WinPattern, WinPatterns, check_winner, winning_line};

use super::{Coord, DimensionError, Dimensions};
use tracing::instrument;

/// Board size plus the win patterns precomputed for it.
///
/// Built once when a game starts and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    dimensions: Dimensions,
    patterns: WinPatterns,
}

impl Rules {
    /// Classic 3x3, three in a row.
    pub fn classic() -> Self {
        Self {
            dimensions: Dimensions::CLASSIC,
            patterns: WinPatterns::classic(),
        }
    }

    /// N-in-a-row on a `rows x columns` board.
    ///
    /// # Errors
    ///
    /// Fails if the board or run length is out of range.
    #[instrument]
    pub fn n_in_a_row(rows: usize, columns: usize, run_length: usize) -> Result<Self, DimensionError> {
        let dimensions = Dimensions::new(rows, columns)?;
        let patterns = WinPatterns::lines(dimensions, run_length)?;
        Ok(Self {
            dimensions,
            patterns,
        })
    }

    /// Rules with caller-supplied patterns, checked against the board.
    ///
    /// # Errors
    ///
    /// Fails if a pattern is empty or references a cell off the board.
    #[instrument(skip(patterns))]
    pub fn with_patterns(
        dimensions: Dimensions,
        patterns: Vec<Vec<Coord>>,
    ) -> Result<Self, DimensionError> {
        let patterns = WinPatterns::custom(dimensions, patterns)?;
        Ok(Self {
            dimensions,
            patterns,
        })
    }

    /// Board size.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Win patterns in declaration order.
    pub fn patterns(&self) -> &WinPatterns {
        &self.patterns
    }

    /// Number of cells on the board.
    pub fn total_cells(&self) -> usize {
        self.dimensions.total_cells()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}
