//! Word-search game sessions.
//!
//! [`WordSearchGame`] bundles one board and one lexicon and exposes the query
//! surface a front end needs: replacing the board, loading the lexicon,
//! enumerating words, tracing a word, scoring, and validating words and
//! prefixes.
//!
//! # Examples
//!
//! ```
//! use wordgrid_game::WordSearchGame;
//!
//! let mut game = WordSearchGame::new();
//! game.set_board(["C", "A", "T", "S"])?;
//! game.load_lexicon_from_reader("act cat cats\ndog".as_bytes())?;
//!
//! let words = game.all_valid_words(3)?;
//! assert_eq!(words.iter().collect::<Vec<_>>(), ["act", "cat", "cats"]);
//! assert_eq!(game.score_words(&words, 3)?, 4);
//! assert_eq!(game.is_on_board("CAT")?, [0, 1, 2]);
//! assert_eq!(game.board().to_string(), "c a\nt s");
//! # Ok::<(), wordgrid_game::GameError>(())
//! ```

pub use self::{error::*, game::*};

mod error;
mod game;
