use crate::error::Error;
use lazy_static::lazy_static;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

/// Quarter of the standard scrabble premium layout; the full board is the
/// mirror image in both axes, with the start square in the center.
const STANDARD_QUARTER_GRID: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

lazy_static! {
    static ref STANDARD: Grid = Grid::expand_quarter_grid(&STANDARD_QUARTER_GRID);
}

/// Premium class of one board square.
///
/// The start square in the center doubles the word score, like a regular
/// double-word square, and must be covered by the first play.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Premium {
    Normal,
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Premium::{LetterBonus, Normal, Start, WordBonus};

impl Premium {
    /// Multiplier applied to the value of a new tile placed here.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    /// Multiplier applied to the whole word when a new tile is placed here.
    pub fn word_multiplier(self) -> u32 {
        match self {
            WordBonus(n) => n,
            Start => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Normal => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Premium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Normal),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Premium; N]; N];

/// The static premium-square layout: 15x15 squares, each normal or with a
/// letter/word bonus. Built once, never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for Grid {
    fn default() -> Grid {
        STANDARD.clone()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    fn empty() -> Grid {
        Grid([[Normal; N]; N])
    }

    /// Expand a quarter layout to the full symmetrical board by mirroring
    /// it horizontally and vertically.
    fn expand_quarter_grid(qg: &[&str; Q]) -> Grid {
        let mut grid = Grid::empty();
        for (i, row) in qg.iter().enumerate() {
            let row = row.split(' ').collect::<Vec<&str>>();
            assert!(row.len() == Q);
            for (j, c) in row.iter().enumerate() {
                let val = c.parse().unwrap();
                grid.0[i][j] = val;
                grid.0[N - i - 1][j] = val;
                grid.0[i][N - j - 1] = val;
                grid.0[N - i - 1][N - j - 1] = val;
            }
        }
        grid
    }

    /// The standard scrabble premium layout.
    pub fn standard() -> Grid {
        STANDARD.clone()
    }

    /// Get grid squares as a vec of 15 strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Premium::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Parameter `grid` must have 15 rows, each row consisting of 15
    /// elements joined by spaces.
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a
    /// [`Premium`].
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut result = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let row: Vec<&str> = row.as_ref().split(' ').collect();
            if row.len() != N {
                return Err(Error::InvalidRowLength(row.join(" "), row.len()));
            }
            for (j, &cell) in row.iter().enumerate() {
                result.0[i][j] = cell.parse()?;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let grid = Grid::standard();
        assert_eq!(grid[7][7], Start);
        assert_eq!(grid[0][0], WordBonus(3));
        assert_eq!(grid[0][14], WordBonus(3));
        assert_eq!(grid[14][0], WordBonus(3));
        assert_eq!(grid[14][14], WordBonus(3));
        assert_eq!(grid[1][5], LetterBonus(3));
        assert_eq!(grid[0][3], LetterBonus(2));
        assert_eq!(grid[1][1], WordBonus(2));
        assert_eq!(grid[13][13], WordBonus(2));
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Normal.letter_multiplier(), 1);
        assert_eq!(Normal.word_multiplier(), 1);
        assert_eq!(LetterBonus(3).letter_multiplier(), 3);
        assert_eq!(LetterBonus(3).word_multiplier(), 1);
        assert_eq!(WordBonus(2).word_multiplier(), 2);
        assert_eq!(Start.word_multiplier(), 2);
        assert_eq!(Start.letter_multiplier(), 1);
    }

    #[test]
    fn test_grid_roundtrip() -> Result<(), Error> {
        let grid = Grid::standard();
        let strings = grid.to_strings();
        assert_eq!(Grid::from_strings(&strings)?, grid);
        Ok(())
    }
}
