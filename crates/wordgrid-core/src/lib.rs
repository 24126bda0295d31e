//! Core data structures for grid word-search games.
//!
//! This crate provides the read-only inputs shared by every search: the square
//! [`Board`] of letter [`Tile`]s and the ordered [`Lexicon`] of legal words.
//!
//! # Overview
//!
//! 1. **Board model**
//!    - [`tile`]: Case-normalized, possibly multi-character tile labels
//!    - [`position`]: `(row, col)` coordinates on a board
//!    - [`board`]: The NxN grid with its row-major index mapping and adjacency
//!
//! 2. **Lexicon index**
//!    - [`lexicon`]: Ordered word set answering exact-word and prefix queries
//!
//! 3. **Search support**
//!    - [`cell_mask`]: Compact set of visited board cells
//!    - [`word_path`]: A traced sequence of board indices spelling a word
//!
//! # Examples
//!
//! ```
//! use wordgrid_core::{Board, Lexicon};
//!
//! let board: Board = "a b c d".parse()?;
//! assert_eq!(board.size(), 2);
//! assert_eq!(board.to_string(), "a b\nc d");
//!
//! let lexicon: Lexicon = ["ab", "abc", "cab"].into_iter().collect();
//! assert!(lexicon.contains("AB"));
//! assert!(lexicon.has_prefix("ca"));
//! assert!(!lexicon.has_prefix("d"));
//! # Ok::<(), wordgrid_core::BoardError>(())
//! ```

pub mod board;
pub mod cell_mask;
pub mod lexicon;
pub mod position;
pub mod tile;
pub mod word_path;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, Neighbors},
    cell_mask::CellMask,
    lexicon::{Lexicon, LexiconError},
    position::Position,
    tile::Tile,
    word_path::WordPath,
};
