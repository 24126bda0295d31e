//! A set of board cells stored as a bitset.
//!
//! [`CellMask`] plays the role of the visited mask during a search: one bit per
//! row-major index, sized for a particular board.

/// A fixed-capacity set of row-major cell indices.
///
/// # Examples
///
/// ```
/// use wordgrid_core::CellMask;
///
/// let mut mask = CellMask::new(16);
/// assert!(mask.insert(5));
/// assert!(!mask.insert(5));
/// assert!(mask.contains(5));
/// assert_eq!(mask.len(), 1);
///
/// assert!(mask.remove(5));
/// assert!(mask.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellMask {
    words: Vec<u64>,
    capacity: usize,
}

impl CellMask {
    const BITS: usize = u64::BITS as usize;

    /// Creates an empty mask able to hold indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS)],
            capacity,
        }
    }

    /// Returns the number of indices the mask can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.capacity,
            "cell index {index} out of range for mask of {} cells",
            self.capacity
        );
        (index / Self::BITS, 1 << (index % Self::BITS))
    }

    /// Adds an index, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, bit) = self.locate(index);
        let was_absent = self.words[word] & bit == 0;
        self.words[word] |= bit;
        was_absent
    }

    /// Removes an index, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn remove(&mut self, index: usize) -> bool {
        let (word, bit) = self.locate(index);
        let was_present = self.words[word] & bit != 0;
        self.words[word] &= !bit;
        was_present
    }

    /// Returns `true` if the index is present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let (word, bit) = self.locate(index);
        self.words[word] & bit != 0
    }

    /// Returns the number of indices present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no index is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Removes every index.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns the present indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.capacity).filter(|&index| self.contains(index))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_spans_multiple_words() {
        let mut mask = CellMask::new(130);
        assert!(mask.insert(0));
        assert!(mask.insert(64));
        assert!(mask.insert(129));
        assert_eq!(mask.iter().collect::<Vec<_>>(), [0, 64, 129]);
        assert_eq!(mask.len(), 3);

        mask.clear();
        assert!(mask.is_empty());
        assert_eq!(mask.capacity(), 130);
    }

    #[test]
    fn test_remove_absent() {
        let mut mask = CellMask::new(4);
        assert!(!mask.remove(3));
        assert!(mask.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_rejects_out_of_range() {
        let mut mask = CellMask::new(4);
        mask.insert(4);
    }

    proptest! {
        #[test]
        fn test_matches_vec_bool(ops in prop::collection::vec((0usize..100, any::<bool>()), 0..200)) {
            let mut mask = CellMask::new(100);
            let mut reference = vec![false; 100];
            for (index, insert) in ops {
                if insert {
                    prop_assert_eq!(mask.insert(index), !reference[index]);
                    reference[index] = true;
                } else {
                    prop_assert_eq!(mask.remove(index), reference[index]);
                    reference[index] = false;
                }
            }
            let expected = (0..100).filter(|&i| reference[i]).collect::<Vec<_>>();
            prop_assert_eq!(mask.iter().collect::<Vec<_>>(), expected.clone());
            prop_assert_eq!(mask.len(), expected.len());
        }
    }
}
