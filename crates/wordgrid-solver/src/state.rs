//! Per-call mutable search state.

use std::ops::{Deref, DerefMut};

use wordgrid_core::{CellMask, Tile};

/// The visited mask, current path and spelled word of one search.
///
/// Cells are entered through [`SearchState::enter`], which returns a [`Step`]
/// guard. Dropping the guard leaves the cell again: its visited bit is cleared,
/// it is popped off the path and its tile is removed from the word. Because the
/// guard is dropped on every exit from a recursive call, including early
/// returns, the state after a call returns is exactly the state before it.
///
/// # Examples
///
/// ```
/// use wordgrid_core::Tile;
/// use wordgrid_solver::SearchState;
///
/// let mut state = SearchState::new(4);
/// {
///     let mut step = state.enter(0, &Tile::new("q"));
///     let step = step.enter(1, &Tile::new("u"));
///     assert_eq!(step.word(), "qu");
///     assert_eq!(step.path(), &[0, 1]);
///     assert!(step.is_visited(1));
/// }
/// assert!(state.is_clear());
/// ```
#[derive(Debug, Clone)]
pub struct SearchState {
    visited: CellMask,
    path: Vec<usize>,
    word: String,
}

impl SearchState {
    /// Creates a cleared state for a board with `cell_count` cells.
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self {
            visited: CellMask::new(cell_count),
            path: Vec::new(),
            word: String::new(),
        }
    }

    /// Returns `true` if the cell is on the current path.
    #[must_use]
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(index)
    }

    /// Returns the current path, oldest cell first.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns the word spelled by the current path.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns `true` if no cell is entered.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.visited.is_empty() && self.path.is_empty() && self.word.is_empty()
    }

    /// Enters the cell at `index` showing `tile`.
    ///
    /// The cell stays entered for as long as the returned guard lives.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for this state. Entering a cell that is
    /// already on the path is a logic error and is caught by a debug assertion.
    pub fn enter(&mut self, index: usize, tile: &Tile) -> Step<'_> {
        let newly_visited = self.visited.insert(index);
        debug_assert!(newly_visited, "cell {index} entered twice");
        let word_len = self.word.len();
        self.path.push(index);
        self.word.push_str(tile.as_str());
        Step {
            state: self,
            index,
            word_len,
        }
    }
}

/// A guard keeping one cell entered in a [`SearchState`].
///
/// Dereferences to the state so that the search can continue from the entered
/// cell; see [`SearchState::enter`].
#[derive(Debug)]
pub struct Step<'a> {
    state: &'a mut SearchState,
    index: usize,
    word_len: usize,
}

impl Step<'_> {
    /// Returns the index of the entered cell.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Step<'_> {
    type Target = SearchState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl DerefMut for Step<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        self.state.visited.remove(self.index);
        let popped = self.state.path.pop();
        debug_assert_eq!(popped, Some(self.index));
        self.state.word.truncate(self.word_len);
    }
}
