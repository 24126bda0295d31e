use std::{collections::BTreeSet, num::NonZeroUsize};

/// Scores a set of words.
///
/// Words are compared case-insensitively and each distinct word is scored
/// once, however often it is repeated. A word with at least `min_length`
/// characters earns one point for reaching the minimum and one more for every
/// character beyond it, so a word of length `n` scores `n - min_length + 1`.
/// Shorter words score nothing.
///
/// No lexicon or board check is made here; callers decide which words count.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use wordgrid_solver::score_words;
///
/// let min_length = NonZeroUsize::new(3).unwrap();
/// assert_eq!(score_words(["at", "cat", "cats", "scatter"], min_length), 1 + 2 + 5);
/// assert_eq!(score_words(Vec::<String>::new(), min_length), 0);
/// ```
pub fn score_words<I, S>(words: I, min_length: NonZeroUsize) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let min_length = min_length.get();
    words
        .into_iter()
        .map(|word| word.as_ref().to_lowercase())
        .collect::<BTreeSet<_>>()
        .iter()
        .map(|word| word.chars().count())
        .filter(|&len| len >= min_length)
        .map(|len| len - min_length + 1)
        .sum()
}
