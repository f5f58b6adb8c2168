//! I define [`IntSet`], a compact set of small non-negative integers.
//!
//! The matcher uses it for the candidate buckets
//! and for the targets already used by the partial bijection.
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of `usize`, backed by a growable bitset.
///
/// Memory is proportional to the greatest element ever inserted,
/// so this is only suitable for dense, small integers (such as node indices).
#[derive(Clone, Default)]
pub struct IntSet {
    words: Vec<u64>,
    len: usize,
}

impl IntSet {
    /// Build an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an empty set,
    /// able to hold all integers below `n` without reallocating.
    pub fn with_capacity(n: usize) -> Self {
        IntSet {
            words: vec![0; n.div_ceil(WORD_BITS)],
            len: 0,
        }
    }

    /// Add `i` to this set.
    ///
    /// Return `true` if `i` was not in the set already.
    pub fn insert(&mut self, i: usize) -> bool {
        let (w, mask) = locate(i);
        if w >= self.words.len() {
            self.words.resize(w + 1, 0);
        }
        let word = &mut self.words[w];
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.len += 1;
        true
    }

    /// Remove `i` from this set.
    ///
    /// Return `true` if `i` was in the set.
    pub fn remove(&mut self, i: usize) -> bool {
        let (w, mask) = locate(i);
        match self.words.get_mut(w) {
            Some(word) if *word & mask != 0 => {
                *word &= !mask;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Whether `i` is in this set.
    pub fn contains(&self, i: usize) -> bool {
        let (w, mask) = locate(i);
        self.words.get(w).is_some_and(|word| word & mask != 0)
    }

    /// The number of elements in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all elements, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
        self.len = 0;
    }

    /// Iterate over the elements of this set, in increasing order.
    pub fn iter(&self) -> IntIter<'_> {
        IntIter {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

#[inline]
fn locate(i: usize) -> (usize, u64) {
    (i / WORD_BITS, 1 << (i % WORD_BITS))
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for IntSet {}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for IntSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IntSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for IntSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for i in iter {
            self.insert(i);
        }
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = usize;
    type IntoIter = IntIter<'a>;

    fn into_iter(self) -> IntIter<'a> {
        self.iter()
    }
}

/// Iterator over the elements of an [`IntSet`].
#[derive(Clone, Debug)]
pub struct IntIter<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl<'a> Iterator for IntIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            if self.index + 1 >= self.words.len() {
                return None;
            }
            self.index += 1;
            self.current = self.words[self.index];
        }
        let bit = self.current.trailing_zeros() as usize;
        // clear lowest set bit
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + bit)
    }
}

impl<'a> std::iter::FusedIterator for IntIter<'a> {}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn empty() {
        let s = IntSet::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert!(!s.contains(0));
        assert_eq!(s.iter().next(), None);
    }

    #[test_case(&[0] ; "zero")]
    #[test_case(&[3, 1, 2] ; "unordered")]
    #[test_case(&[63, 64, 65] ; "word boundary")]
    #[test_case(&[1000, 5] ; "sparse")]
    fn insert_then_iter(values: &[usize]) {
        let mut s = IntSet::new();
        for v in values {
            assert!(s.insert(*v));
        }
        assert_eq!(s.len(), values.len());
        for v in values {
            assert!(s.contains(*v));
        }
        let mut expected = values.to_vec();
        expected.sort();
        assert_eq!(s.iter().collect::<Vec<_>>(), expected);
        // iter is restartable
        assert_eq!(s.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let mut s: IntSet = [4, 2].into_iter().collect();
        assert!(!s.insert(4));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn remove() {
        let mut s: IntSet = [1, 70, 130].into_iter().collect();
        assert!(s.remove(70));
        assert!(!s.remove(70));
        assert!(!s.remove(9999));
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 130]);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(1));
        assert_eq!(s.iter().count(), 0);
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut s1 = IntSet::with_capacity(1000);
        s1.insert(3);
        let s2: IntSet = [3].into_iter().collect();
        assert_eq!(s1, s2);
        let mut s3 = s2.clone();
        s3.insert(500);
        s3.remove(500);
        assert_eq!(s1, s3);
    }

    #[test]
    fn debug() {
        let s: IntSet = [2, 1].into_iter().collect();
        assert_eq!(format!("{s:?}"), "{1, 2}");
    }

    #[test]
    fn into_iterator() {
        let s: IntSet = (0..200).filter(|i| i % 3 == 0).collect();
        let mut total = 0;
        for i in &s {
            assert_eq!(i % 3, 0);
            total += 1;
        }
        assert_eq!(total, s.len());
    }
}
