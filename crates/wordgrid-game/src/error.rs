use wordgrid_core::{BoardError, LexiconError};

/// How a [`GameError`] should be handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum ErrorKind {
    /// An argument was malformed or out of range.
    #[display("invalid argument")]
    InvalidArgument,
    /// The game is not ready for the query; load a lexicon first.
    #[display("invalid state")]
    InvalidState,
}

/// Errors returned by [`WordSearchGame`](crate::WordSearchGame).
///
/// Every error is raised before any game state changes, so the game is left as
/// it was and the caller may simply retry with corrected input.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum GameError {
    /// A query needing the lexicon was made before one was loaded.
    #[display("lexicon is not loaded")]
    LexiconNotLoaded,
    /// The minimum word length was zero.
    #[display("minimum word length must be at least 1, got {min_length}")]
    InvalidMinLength {
        /// The rejected length.
        min_length: usize,
    },
    /// The tiles did not form a valid board.
    #[display("invalid board: {_0}")]
    InvalidBoard(#[from] BoardError),
    /// The lexicon source could not be read.
    #[display("invalid lexicon: {_0}")]
    InvalidLexicon(#[from] LexiconError),
}

impl GameError {
    /// Classifies the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_game::{ErrorKind, GameError};
    ///
    /// assert_eq!(GameError::LexiconNotLoaded.kind(), ErrorKind::InvalidState);
    /// assert_eq!(
    ///     GameError::InvalidMinLength { min_length: 0 }.kind(),
    ///     ErrorKind::InvalidArgument
    /// );
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LexiconNotLoaded => ErrorKind::InvalidState,
            Self::InvalidMinLength { .. } | Self::InvalidBoard(_) | Self::InvalidLexicon(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
