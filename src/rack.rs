use crate::error::Error;
use crate::tiles::{Letter, Tile};
use multiset::HashMultiSet;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// One tile on a rack: a concrete letter, or a blank that can stand in for
/// any letter when placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RackTile {
    Letter(Letter),
    Blank,
}

/// The tiles available to form a play, as a multiset.
///
/// The move generator drains and restores a scratch clone of the caller's
/// rack while backtracking; the caller's own rack is never mutated.
#[derive(Debug, Clone)]
pub struct Rack(HashMultiSet<RackTile>);

impl Deref for Rack {
    type Target = HashMultiSet<RackTile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Rack {
    pub fn new() -> Rack {
        Rack(HashMultiSet::new())
    }

    /// Take a tile that can play as `letter`: the concrete letter if the
    /// rack holds one, otherwise a blank. Returns the tile as it would be
    /// placed on the board, or None if neither is available.
    pub fn take(&mut self, letter: Letter) -> Option<Tile> {
        if self.0.remove(&RackTile::Letter(letter)) {
            Some(Tile::new(letter))
        } else if self.0.remove(&RackTile::Blank) {
            Some(Tile::blank(letter))
        } else {
            None
        }
    }

    /// Return a tile taken with [`take`](Rack::take) while backtracking.
    pub fn put_back(&mut self, tile: Tile) {
        if tile.is_blank() {
            self.0.insert(RackTile::Blank);
        } else {
            self.0.insert(RackTile::Letter(tile.letter()));
        }
    }
}

impl Default for Rack {
    fn default() -> Self {
        Rack::new()
    }
}

/// Parse a rack from its string form, e.g. `"ABCNRS*"`.
/// `*` is a blank; letters are case-insensitive.
impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut rack = HashMultiSet::new();
        for c in s.chars() {
            if c == '*' {
                rack.insert(RackTile::Blank);
            } else {
                rack.insert(RackTile::Letter(Letter::try_from(c)?));
            }
        }
        Ok(Rack(rack))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut chars: Vec<char> = self
            .0
            .iter()
            .map(|t| match t {
                RackTile::Letter(letter) => letter.as_char(),
                RackTile::Blank => '*',
            })
            .collect();
        chars.sort_unstable();
        write!(f, "{}", chars.into_iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let rack = Rack::try_from("AAB*").unwrap();
        assert_eq!(rack.len(), 4);
        assert_eq!(rack.count_of(&RackTile::Blank), 1);
        let a = Letter::try_from('A').unwrap();
        assert_eq!(rack.count_of(&RackTile::Letter(a)), 2);
        assert!(Rack::try_from("A1").is_err());
    }

    #[test]
    fn test_take_prefers_letter() {
        let mut rack = Rack::try_from("A*").unwrap();
        let a = Letter::try_from('A').unwrap();
        let tile = rack.take(a).unwrap();
        assert!(!tile.is_blank());
        // only the blank is left now
        let tile = rack.take(a).unwrap();
        assert!(tile.is_blank());
        assert_eq!(rack.take(a), None);
    }

    #[test]
    fn test_take_put_roundtrip() {
        let mut rack = Rack::try_from("QZ").unwrap();
        let q = Letter::try_from('Q').unwrap();
        let tile = rack.take(q).unwrap();
        assert_eq!(rack.len(), 1);
        rack.put_back(tile);
        assert_eq!(rack.len(), 2);
        assert_eq!(rack.to_string(), "QZ");
    }
}
