use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// Number of distinct letters
pub const ALPHABET_LEN: usize = 26;

/// Point value for each letter, A..Z. A blank is always worth 0.
const POINTS: [u32; ALPHABET_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// One of the 26 letters, stored as an index `0..26`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter(u8);

impl Letter {
    pub(crate) fn from_index(index: u8) -> Letter {
        debug_assert!((index as usize) < ALPHABET_LEN);
        Letter(index)
    }

    /// Index of the letter in the alphabet: `A` is 0, `Z` is 25.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter as an uppercase char.
    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Base point value of the letter.
    pub fn points(self) -> u32 {
        POINTS[self.index()]
    }

    /// Iterate over the whole alphabet, `A` to `Z`.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A'..='Z' => Ok(Letter(c as u8 - b'A')),
            'a'..='z' => Ok(Letter(c as u8 - b'a')),
            _ => Err(Error::InvalidCharacter(c)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A tile as placed on the board: a letter, possibly played with a blank.
///
/// A blank tile represents the letter chosen when it was placed, but is
/// always worth 0 points. In string form a blank is written in lowercase,
/// a regular tile in uppercase.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    letter: Letter,
    blank: bool,
}

impl Tile {
    /// A regular tile for `letter`.
    pub fn new(letter: Letter) -> Tile {
        Tile {
            letter,
            blank: false,
        }
    }

    /// A blank tile standing in for `letter`.
    pub fn blank(letter: Letter) -> Tile {
        Tile {
            letter,
            blank: true,
        }
    }

    /// The letter this tile represents.
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// True if this tile was played with a blank.
    pub fn is_blank(self) -> bool {
        self.blank
    }

    /// Point value: the letter value, or 0 for a blank.
    pub fn points(self) -> u32 {
        if self.blank {
            0
        } else {
            self.letter.points()
        }
    }

    /// The tile as a char: uppercase for a regular tile, lowercase for a blank.
    pub fn as_char(self) -> char {
        if self.blank {
            self.letter.as_char().to_ascii_lowercase()
        } else {
            self.letter.as_char()
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let letter = Letter::try_from(c)?;
        if c.is_ascii_lowercase() {
            Ok(Tile::blank(letter))
        } else {
            Ok(Tile::new(letter))
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A sequence of tiles. Never longer than one board row.
pub type Word = ArrayVec<[Tile; 15]>;

/// Parse a word from its string form, e.g. `"CAt"` for C, A and a blank
/// played as T.
/// ## Errors
/// If a character is not a letter.
pub fn parse_word(s: &str) -> Result<Word, Error> {
    if s.chars().count() > 15 {
        return Err(Error::WordTooLong(String::from(s)));
    }
    s.chars().map(Tile::try_from).collect()
}

/// Render a sequence of tiles as a string, blanks in lowercase.
pub fn word_to_string(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.as_char()).collect()
}
