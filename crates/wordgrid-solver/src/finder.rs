use std::{collections::BTreeSet, num::NonZeroUsize};

use wordgrid_core::{Board, Lexicon, WordPath};

use crate::SearchState;

/// Counters collected while enumerating the words of a board.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use wordgrid_core::{Board, Lexicon};
/// use wordgrid_solver::WordFinder;
///
/// let board: Board = "a b c d".parse()?;
/// let lexicon: Lexicon = ["ab"].into_iter().collect();
/// let finder = WordFinder::new(&board, &lexicon);
///
/// let (words, stats) = finder.all_valid_words_with_stats(NonZeroUsize::MIN);
/// assert_eq!(stats.words_found(), words.len());
/// assert!(stats.branches_pruned() > 0);
/// # Ok::<(), wordgrid_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes_visited: usize,
    branches_pruned: usize,
    words_found: usize,
}

impl SearchStats {
    /// Returns the number of paths examined, pruned ones included.
    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Returns the number of paths abandoned because they spell no lexicon prefix.
    #[must_use]
    pub fn branches_pruned(&self) -> usize {
        self.branches_pruned
    }

    /// Returns the number of distinct words found.
    #[must_use]
    pub fn words_found(&self) -> usize {
        self.words_found
    }
}

/// Searches one board for words of one lexicon.
///
/// The finder only borrows its inputs; every search allocates its own
/// [`SearchState`], so a finder can be queried any number of times and always
/// answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
}

impl<'a> WordFinder<'a> {
    /// Creates a finder over `board` and `lexicon`.
    #[must_use]
    pub fn new(board: &'a Board, lexicon: &'a Lexicon) -> Self {
        Self { board, lexicon }
    }

    /// Returns the board being searched.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Returns the lexicon words are checked against.
    #[must_use]
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Returns every lexicon word with at least `min_length` characters that can
    /// be traced on the board.
    ///
    /// A trace starts at any cell and steps to a side- or diagonal-adjacent cell
    /// at each tile, never reusing a cell. Words reachable along several paths
    /// appear once.
    #[must_use]
    pub fn all_valid_words(&self, min_length: NonZeroUsize) -> BTreeSet<String> {
        self.all_valid_words_with_stats(min_length).0
    }

    /// Like [`all_valid_words`](Self::all_valid_words), also returning search counters.
    #[must_use]
    pub fn all_valid_words_with_stats(
        &self,
        min_length: NonZeroUsize,
    ) -> (BTreeSet<String>, SearchStats) {
        let mut words = BTreeSet::new();
        let mut stats = SearchStats::default();
        let mut state = SearchState::new(self.board.len());

        for start in self.board.indices() {
            let mut step = state.enter(start, self.board.tile(start));
            self.collect(&mut step, start, min_length, &mut words, &mut stats);
        }
        debug_assert!(state.is_clear());

        stats.words_found = words.len();
        log::debug!(
            "found {} words of length >= {min_length} ({} nodes visited, {} pruned)",
            stats.words_found,
            stats.nodes_visited,
            stats.branches_pruned,
        );
        (words, stats)
    }

    fn collect(
        &self,
        state: &mut SearchState,
        current: usize,
        min_length: NonZeroUsize,
        words: &mut BTreeSet<String>,
        stats: &mut SearchStats,
    ) {
        stats.nodes_visited += 1;
        let word = state.word();
        if !self.lexicon.has_prefix(word) {
            stats.branches_pruned += 1;
            return;
        }
        if word.chars().count() >= min_length.get() && self.lexicon.contains(word) {
            // another path may have spelled it already
            if !words.contains(word) {
                words.insert(word.to_owned());
            }
        }

        for next in self.board.neighbors(current) {
            if state.is_visited(next) {
                continue;
            }
            let mut step = state.enter(next, self.board.tile(next));
            self.collect(&mut step, next, min_length, words, stats);
        }
    }

    /// Finds a trace of `word` on the board.
    ///
    /// `word` is matched case-insensitively. Starting cells are tried in row-major
    /// order and the first complete trace found is returned; when several traces
    /// exist, which one is returned is unspecified. Returns `None` for the empty
    /// word and for words that cannot be traced.
    ///
    /// The search is pruned by the lexicon, so only words that are lexicon words
    /// or prefixes of lexicon words can be found.
    #[must_use]
    pub fn find_path(&self, word: &str) -> Option<WordPath> {
        let target = word.to_lowercase();
        let first = target.chars().next()?;
        let mut state = SearchState::new(self.board.len());

        let found = self
            .board
            .indices()
            .filter(|&start| self.board.tile(start).first_char() == Some(first))
            .find_map(|start| {
                let mut step = state.enter(start, self.board.tile(start));
                self.trace(&mut step, start, &target)
            });
        debug_assert!(state.is_clear());

        match &found {
            Some(path) => log::debug!("traced {target:?} along {:?}", path.indices()),
            None => log::debug!("{target:?} is not on the board"),
        }
        found
    }

    fn trace(&self, state: &mut SearchState, current: usize, target: &str) -> Option<WordPath> {
        let word = state.word();
        if !target.starts_with(word) || !self.lexicon.has_prefix(word) {
            return None;
        }
        if word.len() == target.len() {
            return Some(WordPath::from(state.path().to_vec()));
        }

        for next in self.board.neighbors(current) {
            if state.is_visited(next) {
                continue;
            }
            let mut step = state.enter(next, self.board.tile(next));
            if let Some(path) = self.trace(&mut step, next, target) {
                return Some(path);
            }
        }
        None
    }
}
