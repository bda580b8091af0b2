//! Named cells of the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Engine operations take raw indices at the boundary and convert to
/// `Position` once, so everything past validation works with a closed set
/// of cells instead of a bare `usize`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, col 0.
    TopLeft,
    /// Row 0, col 1.
    TopCenter,
    /// Row 0, col 2.
    TopRight,
    /// Row 1, col 0.
    MiddleLeft,
    /// Row 1, col 1.
    Center,
    /// Row 1, col 2.
    MiddleRight,
    /// Row 2, col 0.
    BottomLeft,
    /// Row 2, col 1.
    BottomCenter,
    /// Row 2, col 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Row on the board, counted from the top (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column on the board, counted from the left (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// The number printed in this cell while it is empty (1-9).
    pub fn cell_number(self) -> usize {
        self.to_index() + 1
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell {} (row {}, col {})", self.cell_number(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_covers_every_cell() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
    }

    #[test]
    fn test_center_sits_in_the_middle() {
        assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
        assert_eq!(Position::Center.to_string(), "cell 5 (row 1, col 1)");
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_index(usize::MAX), None);
    }
}
