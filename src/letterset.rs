#[cfg(feature = "bitintr")]
use bitintr::Popcnt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

use crate::tiles::{Letter, ALPHABET_LEN};

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

/// A bitset of letters, used for the cross-check tables.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set.
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// The full 26-letter alphabet.
    pub const ALL: LetterSet = LetterSet((1 << ALPHABET_LEN) - 1);

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Insert `letter`, returns true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let v = letter.index();
        let r = (self.0 & (1 << v)) != 0;
        self.0 |= 1 << v;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(|letter| letter.as_char()).collect();
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLetterSet {
    count: u32,
    value: u32,
}

impl IteratorLetterSet {
    fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 0, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Letter;
    fn next(&mut self) -> Option<Letter> {
        while self.count < ALPHABET_LEN as u32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(Letter::from_index(i as u8));
            }
        }
        None
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::try_from(c).unwrap()).collect()
    }

    #[test]
    fn test_letterset() {
        let mut set = LetterSet::new();
        for letter in letters("CZCA") {
            set.insert(letter);
        }
        for letter in letters("ACZ") {
            assert!(set.contains(letter));
        }
        assert!(!set.contains(Letter::try_from('F').unwrap()));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_all() {
        assert_eq!(LetterSet::ALL.len(), 26);
        for letter in Letter::alphabet() {
            assert!(LetterSet::ALL.contains(letter));
        }
    }

    #[test]
    fn test_iterator() {
        let set: LetterSet = letters("DBA").into_iter().collect();
        let out: String = set.iter().map(|l| l.as_char()).collect();
        assert_eq!(out, "ABD");
    }

}
