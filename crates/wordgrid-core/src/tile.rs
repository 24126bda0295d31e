//! Board tile labels.

use std::fmt::{self, Display};

/// The label printed on one board cell.
///
/// A tile is an opaque string that may span several characters (the classic
/// example is `"qu"`). Labels are stored lowercased so that every comparison
/// against the lexicon is case-insensitive.
///
/// # Examples
///
/// ```
/// use wordgrid_core::Tile;
///
/// let tile = Tile::new("Qu");
/// assert_eq!(tile.as_str(), "qu");
/// assert_eq!(tile.first_char(), Some('q'));
/// assert_eq!(tile.char_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    label: String,
}

impl Tile {
    /// Creates a tile, lowercasing `label`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_lowercase(),
        }
    }

    /// Returns the lowercased label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Returns the first character of the label, or `None` for an empty label.
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.label.chars().next()
    }

    /// Returns the number of characters the tile contributes to a word.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.label.chars().count()
    }

    /// Returns `true` if the label has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Tile {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases() {
        assert_eq!(Tile::new("QU").as_str(), "qu");
        assert_eq!(Tile::new("e").as_str(), "e");
    }

    #[test]
    fn test_empty_label() {
        let tile = Tile::new("");
        assert!(tile.is_empty());
        assert_eq!(tile.first_char(), None);
        assert_eq!(tile.char_count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new("Th").to_string(), "th");
    }
}
