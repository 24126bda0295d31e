//! Board coordinates.

use std::fmt::{self, Display};

/// A `(row, col)` coordinate on a board.
///
/// Rows are numbered top to bottom and columns left to right, both starting at
/// zero. A position carries no board size; use [`Board::index_of`] and
/// [`Board::position_of`] to convert to and from row-major indices.
///
/// [`Board::index_of`]: crate::Board::index_of
/// [`Board::position_of`]: crate::Board::position_of
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns `true` if `other` is one of the up to eight cells surrounding `self`.
    ///
    /// A position is not adjacent to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_core::Position;
    ///
    /// let center = Position::new(1, 1);
    /// assert!(center.is_adjacent(Position::new(0, 0)));
    /// assert!(center.is_adjacent(Position::new(2, 1)));
    /// assert!(!center.is_adjacent(Position::new(1, 3)));
    /// assert!(!center.is_adjacent(center));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
