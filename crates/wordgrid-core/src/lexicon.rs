//! The ordered word index.
//!
//! [`Lexicon`] stores lowercase words in lexicographic order. Besides exact
//! membership it answers *prefix existence*: a prefix `p` matches some word iff
//! the smallest word `>= p` (its ceiling) starts with `p`. That reduces every
//! prefix test to one ordered-successor lookup instead of a trie walk.
//!
//! # Loading
//!
//! A lexicon source is a stream of whitespace-separated tokens, any number per
//! line. Every token is lowercased before insertion and duplicates collapse.
//!
//! ```
//! use wordgrid_core::Lexicon;
//!
//! let source = "Apple apple\nbanana  cherry\n";
//! let lexicon = Lexicon::from_reader(source.as_bytes())?;
//! assert_eq!(lexicon.len(), 3);
//! assert!(lexicon.contains("APPLE"));
//! assert!(lexicon.has_prefix("ban"));
//! assert!(!lexicon.has_prefix("bb"));
//! # Ok::<(), wordgrid_core::LexiconError>(())
//! ```

use std::{
    borrow::Cow,
    collections::BTreeSet,
    fs::File,
    io::{self, BufRead, BufReader},
    ops::Bound,
    path::{Path, PathBuf},
};

/// Errors that can occur while reading a lexicon source.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum LexiconError {
    /// The lexicon file could not be opened.
    #[display("failed to open lexicon file {}", path.display())]
    Open {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The source could not be read to the end, or was not valid UTF-8.
    #[display("failed to read lexicon source")]
    Read(io::Error),
}

/// An immutable, ordered set of lowercase words.
///
/// All queries are case-insensitive: query strings are lowercased before lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

fn normalize(s: &str) -> Cow<'_, str> {
    // titlecase letters such as 'ǅ' are not uppercase but still lowercase to something else
    if s.chars().any(|c| !c.to_lowercase().eq([c])) {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads whitespace-separated tokens from `reader`.
    ///
    /// Either the whole source is read or an error is returned; a partially read
    /// lexicon is never produced.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Read`] if reading fails or the source is not valid UTF-8.
    pub fn from_reader<R>(reader: R) -> Result<Self, LexiconError>
    where
        R: BufRead,
    {
        let mut words = BTreeSet::new();
        for line in reader.lines() {
            let line = line.map_err(LexiconError::Read)?;
            words.extend(line.split_whitespace().map(str::to_lowercase));
        }
        log::debug!("read {} lexicon entries", words.len());
        Ok(Self { words })
    }

    /// Reads a lexicon file.
    ///
    /// # Errors
    ///
    /// - [`LexiconError::Open`] if the file cannot be opened.
    /// - [`LexiconError::Read`] if its contents cannot be read.
    pub fn from_path<P>(path: P) -> Result<Self, LexiconError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the lexicon holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns every word in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns `true` if `word` is in the lexicon.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&*normalize(word))
    }

    /// Returns the smallest word greater than or equal to `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_core::Lexicon;
    ///
    /// let lexicon: Lexicon = ["bee", "cat", "cattle"].into_iter().collect();
    /// assert_eq!(lexicon.ceiling("c"), Some("cat"));
    /// assert_eq!(lexicon.ceiling("cat"), Some("cat"));
    /// assert_eq!(lexicon.ceiling("catt"), Some("cattle"));
    /// assert_eq!(lexicon.ceiling("d"), None);
    /// ```
    #[must_use]
    pub fn ceiling(&self, s: &str) -> Option<&str> {
        self.words
            .range::<str, _>((Bound::Included(&*normalize(s)), Bound::Unbounded))
            .next()
            .map(String::as_str)
    }

    /// Returns `true` if some word starts with `prefix`.
    ///
    /// The empty prefix matches iff the lexicon is non-empty.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = normalize(prefix);
        self.ceiling(&prefix)
            .is_some_and(|word| word.starts_with(&*prefix))
    }

    /// Returns every word starting with `prefix`, in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_core::Lexicon;
    ///
    /// let lexicon: Lexicon = ["bee", "cat", "cattle", "dog"].into_iter().collect();
    /// let words = lexicon.words_with_prefix("Cat").collect::<Vec<_>>();
    /// assert_eq!(words, ["cat", "cattle"]);
    /// ```
    pub fn words_with_prefix<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let prefix = normalize(prefix).into_owned();
        self.words
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .map(String::as_str)
            .take_while(move |word| word.starts_with(prefix.as_str()))
    }
}

impl<S> FromIterator<S> for Lexicon
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }
}
