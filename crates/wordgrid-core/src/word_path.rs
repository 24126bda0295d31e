//! Traced paths through a board.

use crate::{Board, CellMask, Position};

/// An ordered sequence of row-major board indices, one per tile consumed.
///
/// A path is *traceable* for a word on a board when every index is on the board,
/// no index repeats, consecutive indices are adjacent (including diagonally),
/// and the tiles along it spell the word.
///
/// # Examples
///
/// ```
/// use wordgrid_core::{Board, WordPath};
///
/// let board: Board = "c a t s".parse()?;
/// let path = WordPath::from(vec![0, 1, 2]);
/// assert!(path.is_traceable(&board, "CAT"));
/// assert!(!path.is_traceable(&board, "cats"));
/// # Ok::<(), wordgrid_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordPath {
    indices: Vec<usize>,
}

impl WordPath {
    /// Returns the row-major indices in traversal order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of cells on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the path visits no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the positions along the path on `board`.
    ///
    /// # Panics
    ///
    /// Panics if an index lies outside `board`.
    pub fn positions<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = Position> + 'a {
        self.indices.iter().map(|&index| board.position_of(index))
    }

    /// Returns `true` if the path is a simple, connected trace of `word` on `board`.
    ///
    /// `word` is compared case-insensitively.
    #[must_use]
    pub fn is_traceable(&self, board: &Board, word: &str) -> bool {
        let mut seen = CellMask::new(board.len());
        let simple = self
            .indices
            .iter()
            .all(|&index| index < board.len() && seen.insert(index));
        let connected = self
            .indices
            .windows(2)
            .all(|pair| board.are_adjacent(pair[0], pair[1]));
        simple
            && connected
            && board
                .word_along(&self.indices)
                .is_some_and(|spelled| spelled == word.to_lowercase())
    }

    /// Consumes the path, returning its indices.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl From<Vec<usize>> for WordPath {
    fn from(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl From<WordPath> for Vec<usize> {
    fn from(path: WordPath) -> Self {
        path.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        "a b c d e f g h qu".parse().unwrap()
    }

    #[test]
    fn test_traceable() {
        let board = board();
        assert!(WordPath::from(vec![0, 4, 8]).is_traceable(&board, "aequ"));
        assert!(WordPath::from(vec![2, 4, 6]).is_traceable(&board, "ceg"));
    }

    #[test]
    fn test_rejects_gaps_repeats_and_mismatches() {
        let board = board();
        // 0 and 2 are two columns apart
        assert!(!WordPath::from(vec![0, 2]).is_traceable(&board, "ac"));
        assert!(!WordPath::from(vec![0, 1, 0]).is_traceable(&board, "aba"));
        assert!(!WordPath::from(vec![0, 1]).is_traceable(&board, "ax"));
        assert!(!WordPath::from(vec![8, 9]).is_traceable(&board, "qu"));
    }

    #[test]
    fn test_empty_path_spells_empty_word() {
        let board = board();
        assert!(WordPath::default().is_traceable(&board, ""));
        assert!(!WordPath::default().is_traceable(&board, "a"));
    }

    #[test]
    fn test_positions() {
        let board = board();
        let path = WordPath::from(vec![3, 7]);
        assert_eq!(
            path.positions(&board).collect::<Vec<_>>(),
            [Position::new(1, 0), Position::new(2, 1)]
        );
        assert_eq!(path.into_indices(), [3, 7]);
    }
}
