use std::{collections::BTreeSet, io::BufRead, num::NonZeroUsize, path::Path};

use wordgrid_core::{Board, Lexicon};
use wordgrid_solver::WordFinder;

use crate::GameError;

/// A word-search game session.
///
/// A session owns one [`Board`] and, once loaded, one [`Lexicon`]. Both are
/// replaced wholesale, never mutated in place, so every search sees a
/// consistent pair. A new session starts on [`Board::default`] with no lexicon;
/// every query that consults the lexicon fails with
/// [`GameError::LexiconNotLoaded`] until one is loaded.
///
/// # Example
///
/// ```
/// use wordgrid_game::{GameError, WordSearchGame};
///
/// let mut game = WordSearchGame::new();
/// assert!(matches!(
///     game.all_valid_words(3),
///     Err(GameError::LexiconNotLoaded)
/// ));
///
/// game.load_lexicon_from_reader("peel lean zebra".as_bytes())?;
/// let words = game.all_valid_words(4)?;
/// assert!(words.contains("peel"));
/// assert!(!words.contains("zebra"));
/// # Ok::<(), GameError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordSearchGame {
    board: Board,
    lexicon: Option<Lexicon>,
}

impl WordSearchGame {
    /// Creates a session on the default board with no lexicon loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from an existing board and lexicon.
    #[must_use]
    pub fn with_parts(board: Board, lexicon: Lexicon) -> Self {
        Self {
            board,
            lexicon: Some(lexicon),
        }
    }

    /// Returns the current board.
    ///
    /// Its [`Display`](std::fmt::Display) rendering puts each row on its own
    /// line with tiles separated by spaces.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board with tiles given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoard`] if the tiles do not form a non-empty
    /// square grid; the current board is kept in that case.
    pub fn set_board<I, S>(&mut self, tiles: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let board = Board::new(tiles)?;
        log::info!("board set to {0}x{0}", board.size());
        self.board = board;
        Ok(())
    }

    /// Returns the loaded lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    pub fn lexicon(&self) -> Result<&Lexicon, GameError> {
        self.lexicon.as_ref().ok_or(GameError::LexiconNotLoaded)
    }

    /// Replaces the lexicon.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        log::info!("lexicon set with {} words", lexicon.len());
        self.lexicon = Some(lexicon);
    }

    /// Loads the lexicon from a file of whitespace-separated words.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLexicon`] if the file cannot be opened or read;
    /// the current lexicon is kept in that case.
    pub fn load_lexicon<P>(&mut self, path: P) -> Result<(), GameError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let lexicon = Lexicon::from_path(path)?;
        log::info!("loaded lexicon from {}", path.display());
        self.set_lexicon(lexicon);
        Ok(())
    }

    /// Loads the lexicon from a reader of whitespace-separated words.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLexicon`] if reading fails; the current
    /// lexicon is kept in that case.
    pub fn load_lexicon_from_reader<R>(&mut self, reader: R) -> Result<(), GameError>
    where
        R: BufRead,
    {
        let lexicon = Lexicon::from_reader(reader)?;
        self.set_lexicon(lexicon);
        Ok(())
    }

    fn finder(&self) -> Result<WordFinder<'_>, GameError> {
        Ok(WordFinder::new(&self.board, self.lexicon()?))
    }

    /// Returns every lexicon word with at least `min_length` characters that can
    /// be traced on the board, in lexicographic order.
    ///
    /// # Errors
    ///
    /// - [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    /// - [`GameError::InvalidMinLength`] if `min_length` is zero.
    pub fn all_valid_words(&self, min_length: usize) -> Result<BTreeSet<String>, GameError> {
        let finder = self.finder()?;
        let min_length = check_min_length(min_length)?;
        Ok(finder.all_valid_words(min_length))
    }

    /// Returns the row-major board indices of one trace of `word`, or an empty
    /// vector if `word` cannot be traced.
    ///
    /// Only lexicon words and prefixes of lexicon words can be traced.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>, GameError> {
        let finder = self.finder()?;
        Ok(finder.find_path(word).map(Vec::from).unwrap_or_default())
    }

    /// Scores `words`: each distinct word (ignoring case) with at least
    /// `min_length` characters earns `len - min_length + 1` points.
    ///
    /// Words are not checked against the lexicon or the board; see
    /// [`score_scorable_words`](Self::score_scorable_words) for that.
    ///
    /// # Errors
    ///
    /// - [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    /// - [`GameError::InvalidMinLength`] if `min_length` is zero.
    pub fn score_words<I, S>(&self, words: I, min_length: usize) -> Result<usize, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lexicon()?;
        let min_length = check_min_length(min_length)?;
        Ok(wordgrid_solver::score_words(words, min_length))
    }

    /// Scores only the words of `words` that are long enough, in the lexicon and
    /// traceable on the board.
    ///
    /// # Errors
    ///
    /// - [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    /// - [`GameError::InvalidMinLength`] if `min_length` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_core::{Board, Lexicon};
    /// use wordgrid_game::WordSearchGame;
    ///
    /// let board: Board = "c a t s".parse()?;
    /// let lexicon: Lexicon = ["cat", "cats", "dog"].into_iter().collect();
    /// let game = WordSearchGame::with_parts(board, lexicon);
    ///
    /// // "dog" is not on the board and "tac" is not a word
    /// let score = game.score_scorable_words(["cat", "CATS", "dog", "tac"], 3)?;
    /// assert_eq!(score, 1 + 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn score_scorable_words<I, S>(&self, words: I, min_length: usize) -> Result<usize, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let finder = self.finder()?;
        let min_length = check_min_length(min_length)?;
        let scorable = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .filter(|word| finder.lexicon().contains(word))
            .filter(|word| finder.find_path(word).is_some())
            .collect::<BTreeSet<_>>();
        Ok(wordgrid_solver::score_words(&scorable, min_length))
    }

    /// Returns `true` if `word` is in the lexicon, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, GameError> {
        Ok(self.lexicon()?.contains(word))
    }

    /// Returns `true` if some lexicon word starts with `prefix`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::LexiconNotLoaded`] if no lexicon has been loaded.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, GameError> {
        Ok(self.lexicon()?.has_prefix(prefix))
    }
}

fn check_min_length(min_length: usize) -> Result<NonZeroUsize, GameError> {
    NonZeroUsize::new(min_length).ok_or(GameError::InvalidMinLength { min_length })
}
