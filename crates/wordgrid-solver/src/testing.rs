//! Test helpers for search implementations.

use wordgrid_core::{Board, Lexicon, WordPath};

/// Parses a board from whitespace-separated tiles.
#[track_caller]
pub(crate) fn board(tiles: &str) -> Board {
    tiles.parse().expect("test board must be square")
}

/// Builds a lexicon from a word list.
pub(crate) fn lexicon(words: &[&str]) -> Lexicon {
    words.iter().collect()
}

/// Asserts that `path` is a simple, connected trace of `word` on `board`.
#[track_caller]
pub(crate) fn assert_traceable(board: &Board, path: &WordPath, word: &str) {
    let spelled = board.word_along(path.indices());
    assert!(
        path.is_traceable(board, word),
        "path {:?} does not trace {word:?} (spells {spelled:?})\nboard:\n{board}",
        path.indices(),
    );
}
