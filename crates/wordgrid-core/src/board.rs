//! Square boards of letter tiles.
//!
//! A [`Board`] is an immutable NxN grid of [`Tile`]s. Cells are addressed either
//! by [`Position`] or by a row-major index `row * N + col` in `0..N²`; the two
//! are interchangeable through [`Board::index_of`] and [`Board::position_of`].
//!
//! # Examples
//!
//! ```
//! use wordgrid_core::{Board, Position};
//!
//! let board = Board::new(["E", "E", "C", "A", "A", "L", "E", "P", "H", "N", "B", "O", "QU", "T", "T", "Y"])?;
//! assert_eq!(board.size(), 4);
//! assert_eq!(board.tile_at(Position::new(3, 0)).as_str(), "qu");
//! assert_eq!(board.index_of(Position::new(2, 1)), 9);
//! assert_eq!(board.neighbors(0).as_slice(), &[1, 4, 5]);
//! # Ok::<(), wordgrid_core::BoardError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{Position, Tile};

/// Errors that can occur when constructing a [`Board`].
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum BoardError {
    /// The tile sequence was empty.
    #[display("board has no tiles")]
    Empty,
    /// The number of tiles is not a perfect square.
    #[display("{len} tiles cannot form a square board")]
    NotSquare {
        /// Number of tiles supplied.
        len: usize,
    },
    /// A tile label had no characters.
    #[display("tile at index {index} is empty")]
    EmptyTile {
        /// Row-major index of the offending tile.
        index: usize,
    },
}

/// The cells surrounding a board cell, as row-major indices in ascending order.
pub type Neighbors = ArrayVec<[usize; 8]>;

const DEFAULT_TILES: [&str; 16] = [
    "e", "e", "c", "a", "a", "l", "e", "p", "h", "n", "b", "o", "q", "t", "t", "y",
];

/// An immutable NxN grid of tiles.
///
/// The grid is never empty and its tile count is always a perfect square.
/// Every tile label is lowercased at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates a board from tile labels in row-major order.
    ///
    /// # Errors
    ///
    /// - [`BoardError::Empty`] if no labels are given.
    /// - [`BoardError::NotSquare`] if the number of labels is not a perfect square.
    /// - [`BoardError::EmptyTile`] if a label has no characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_core::{Board, BoardError};
    ///
    /// assert!(Board::new(["a", "b", "c", "d"]).is_ok());
    /// assert_eq!(
    ///     Board::new(["a", "b", "c"]),
    ///     Err(BoardError::NotSquare { len: 3 })
    /// );
    /// ```
    pub fn new<I, S>(labels: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiles = labels
            .into_iter()
            .map(|label| Tile::new(label.as_ref()))
            .collect::<Vec<_>>();
        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        let size = tiles.len().isqrt();
        if size * size != tiles.len() {
            return Err(BoardError::NotSquare { len: tiles.len() });
        }
        if let Some(index) = tiles.iter().position(Tile::is_empty) {
            return Err(BoardError::EmptyTile { index });
        }
        Ok(Self { size, tiles })
    }

    /// Returns the side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, N².
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; a board has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns all tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns an iterator over every row-major index.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        0..self.tiles.len()
    }

    /// Returns the tile at a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    /// Returns the tile at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> &Tile {
        &self.tiles[self.index_of(pos)]
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Converts a position to its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {n}x{n} board",
            n = self.size
        );
        pos.row() * self.size + pos.col()
    }

    /// Converts a row-major index to its position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Position {
        assert!(
            index < self.len(),
            "index {index} is outside a board of {} cells",
            self.len()
        );
        Position::new(index / self.size, index % self.size)
    }

    /// Returns the row-major indices of the cells surrounding `index`.
    ///
    /// These are the cells of the 3x3 block centered on `index` that lie on the
    /// board, excluding `index` itself: three in a corner, five on an edge and
    /// eight in the interior.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> Neighbors {
        let pos = self.position_of(index);
        let mut neighbors = Neighbors::new();
        for dr in -1..=1 {
            let Some(row) = pos.row().checked_add_signed(dr) else {
                continue;
            };
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(col) = pos.col().checked_add_signed(dc) else {
                    continue;
                };
                let neighbor = Position::new(row, col);
                if self.contains(neighbor) {
                    neighbors.push(self.index_of(neighbor));
                }
            }
        }
        neighbors
    }

    /// Returns `true` if the cells at two row-major indices touch, sideways or diagonally.
    ///
    /// Out-of-range indices are never adjacent.
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        a < self.len() && b < self.len() && self.position_of(a).is_adjacent(self.position_of(b))
    }

    /// Concatenates the tiles along `path`.
    ///
    /// Returns `None` if any index is outside the board. Adjacency and
    /// repetition are not checked; see [`WordPath::is_traceable`] for that.
    ///
    /// [`WordPath::is_traceable`]: crate::WordPath::is_traceable
    #[must_use]
    pub fn word_along(&self, path: &[usize]) -> Option<String> {
        path.iter()
            .map(|&index| self.tiles.get(index).map(Tile::as_str))
            .collect()
    }
}

impl Default for Board {
    /// Returns the standard 4x4 practice board:
    ///
    /// ```text
    /// e e c a
    /// a l e p
    /// h n b o
    /// q t t y
    /// ```
    fn default() -> Self {
        Self {
            size: 4,
            tiles: DEFAULT_TILES.into_iter().map(Tile::new).collect(),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses whitespace-separated tile labels in row-major order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x3() -> Board {
        Board::new(["a", "b", "c", "d", "e", "f", "g", "h", "i"]).unwrap()
    }

    #[test]
    fn test_new_lowercases_tiles() {
        let board = Board::new(["A", "Qu", "c", "D"]).unwrap();
        let labels = board.tiles().iter().map(Tile::as_str).collect::<Vec<_>>();
        assert_eq!(labels, ["a", "qu", "c", "d"]);
    }

    #[test]
    fn test_new_rejects_bad_shapes() {
        assert_eq!(Board::new(Vec::<&str>::new()), Err(BoardError::Empty));
        assert_eq!(Board::new(["a", "b"]), Err(BoardError::NotSquare { len: 2 }));
        assert_eq!(
            Board::new(["a"; 10]),
            Err(BoardError::NotSquare { len: 10 })
        );
        assert_eq!(
            Board::new(["a", "", "c", "d"]),
            Err(BoardError::EmptyTile { index: 1 })
        );
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(["x"]).unwrap();
        assert_eq!(board.size(), 1);
        assert!(board.neighbors(0).is_empty());
        assert_eq!(board.to_string(), "x");
    }

    #[test]
    fn test_index_position_round_trip() {
        let board = board_3x3();
        for index in board.indices() {
            assert_eq!(board.index_of(board.position_of(index)), index);
        }
        assert_eq!(board.position_of(5), Position::new(1, 2));
        assert_eq!(board.tile_at(Position::new(2, 0)).as_str(), "g");
    }

    #[test]
    fn test_neighbors() {
        let board = board_3x3();
        assert_eq!(board.neighbors(0).as_slice(), &[1, 3, 4]);
        assert_eq!(board.neighbors(1).as_slice(), &[0, 2, 3, 4, 5]);
        assert_eq!(board.neighbors(4).as_slice(), &[0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.neighbors(8).as_slice(), &[4, 5, 7]);
    }

    #[test]
    fn test_are_adjacent() {
        let board = board_3x3();
        assert!(board.are_adjacent(0, 4));
        assert!(board.are_adjacent(2, 4));
        assert!(!board.are_adjacent(2, 3));
        assert!(!board.are_adjacent(4, 4));
        assert!(!board.are_adjacent(8, 9));
    }

    #[test]
    fn test_word_along() {
        let board = Board::new(["qu", "i", "t", "e"]).unwrap();
        assert_eq!(board.word_along(&[0, 1, 2, 3]).as_deref(), Some("quite"));
        assert_eq!(board.word_along(&[]).as_deref(), Some(""));
        assert_eq!(board.word_along(&[0, 4]), None);
    }

    #[test]
    fn test_display_and_parse() {
        let board: Board = "A B\nC  QU".parse().unwrap();
        assert_eq!(board.to_string(), "a b\nc qu");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.size(), 4);
        assert_eq!(board.len(), 16);
        assert_eq!(board.to_string(), "e e c a\na l e p\nh n b o\nq t t y");
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_of_rejects_outside_position() {
        let _ = board_3x3().index_of(Position::new(0, 3));
    }
}
