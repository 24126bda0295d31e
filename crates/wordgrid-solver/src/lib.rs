//! Word search over a square board of tiles.
//!
//! This crate provides the two searches of a word-search game plus its scoring rule:
//!
//! - [`WordFinder::all_valid_words`] enumerates every lexicon word of a minimum
//!   length that can be traced on the board.
//! - [`WordFinder::find_path`] finds one trace for a single word.
//! - [`score_words`] scores a set of words.
//!
//! Both searches are depth-first with prefix pruning: a branch is abandoned as
//! soon as the string spelled so far is not a prefix of any lexicon word. Each
//! call owns a fresh [`SearchState`], so no search state survives between calls.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use wordgrid_core::{Board, Lexicon};
//! use wordgrid_solver::{WordFinder, score_words};
//!
//! let board: Board = "c a t s".parse()?;
//! let lexicon: Lexicon = ["act", "cat", "cats", "dog"].into_iter().collect();
//! let finder = WordFinder::new(&board, &lexicon);
//!
//! let min_length = NonZeroUsize::new(3).unwrap();
//! let words = finder.all_valid_words(min_length);
//! assert_eq!(words.iter().collect::<Vec<_>>(), ["act", "cat", "cats"]);
//! assert_eq!(score_words(&words, min_length), 4);
//!
//! let path = finder.find_path("cats").unwrap();
//! assert_eq!(path.indices(), &[0, 1, 2, 3]);
//! # Ok::<(), wordgrid_core::BoardError>(())
//! ```

pub use self::{
    finder::{SearchStats, WordFinder},
    score::score_words,
    state::{SearchState, Step},
};

mod finder;
mod score;
mod state;

#[cfg(test)]
mod testing;
