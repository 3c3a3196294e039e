use crate::error::Error;
use crate::grid::Grid;
use crate::tiles::Tile;
use std::convert::TryFrom;
use std::fmt;

/// The board is N x N squares.
pub const N: usize = 15;

/// The center square, which the first play must cover.
pub const CENTER: Pos = Pos { row: 7, col: 7 };

/// Direction of a play: along a row or along a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// (row, col) step for one cell in this direction.
    pub fn deltas(self) -> (i32, i32) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// The perpendicular direction.
    pub fn cross(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A board coordinate. May lie outside the board while scanning; all
/// board accessors are bounds-checked.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub fn new(row: i32, col: i32) -> Pos {
        Pos { row, col }
    }

    /// Step `n` cells in `dir`. Negative `n` steps backwards.
    pub fn step(self, dir: Direction, n: i32) -> Pos {
        let (dr, dc) = dir.deltas();
        Pos {
            row: self.row + n * dr,
            col: self.col + n * dc,
        }
    }

    /// The cell immediately before this one in `dir`.
    pub fn before(self, dir: Direction) -> Pos {
        self.step(dir, -1)
    }

    /// The cell immediately after this one in `dir`.
    pub fn after(self, dir: Direction) -> Pos {
        self.step(dir, 1)
    }

    /// The cell immediately before this one in the perpendicular direction.
    pub fn before_cross(self, dir: Direction) -> Pos {
        self.step(dir.cross(), -1)
    }

    /// The cell immediately after this one in the perpendicular direction.
    pub fn after_cross(self, dir: Direction) -> Pos {
        self.step(dir.cross(), 1)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where a play is rooted: a direction and the cell where its first newly
/// placed tile lands. Not necessarily the start of the full word, which
/// may extend back through existing tiles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub dir: Direction,
    pub start: Pos,
}

impl Position {
    pub fn new(dir: Direction, row: i32, col: i32) -> Position {
        Position {
            dir,
            start: Pos::new(row, col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.start, self.dir)
    }
}

type Cells = [[Option<Tile>; N]; N];

/// The state of a scrabble board: 15x15 cells, each empty or holding one
/// tile, plus the static premium layout.
///
/// `Board` is `Clone`; the move generator and scorer explore hypothetical
/// placements against an immutable snapshot and never mutate it. Only
/// [`play_unchecked`](Board::play_unchecked) commits tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Cells,
    grid: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".", blanks in lowercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Tile::as_char))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Board {
    /// Create a new empty board with the standard premium layout.
    #[must_use]
    pub fn new() -> Board {
        Board {
            cells: [[None; N]; N],
            grid: Grid::standard(),
        }
    }

    /// Use a custom premium layout, and return the modified board.
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.grid = Grid::from_strings(grid)?;
        Ok(self)
    }

    /// Set the board state from a list of 15 rows of 15 characters each.
    /// `.` or space is an empty cell, a lowercase letter is a blank tile.
    /// ## Errors
    /// If the rows have wrong dimensions or hold invalid characters.
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut cells: Cells = [[None; N]; N];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row),
                    row.chars().count(),
                ));
            }
            for (j, c) in row.chars().enumerate() {
                cells[i][j] = match c {
                    '.' | ' ' => None,
                    _ => Some(Tile::try_from(c)?),
                };
            }
        }
        self.cells = cells;
        Ok(())
    }

    /// Set the board state from strings, and return the modified board.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let board = Board::new().with_state_from_strings(&[
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     ".......CAT.....",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    ///     "...............",
    /// ])?;
    /// assert!(board.is_filled(scrabble_solver::Pos::new(7, 7)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// True if `pos` lies on the board.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < N as i32 && pos.col >= 0 && pos.col < N as i32
    }

    /// The tile at `pos`, or None if the cell is empty or off the board.
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        if self.in_bounds(pos) {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            None
        }
    }

    /// Place a tile. `pos` must be on the board; passing an out-of-bounds
    /// position is a contract violation, not a gameplay error.
    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        assert!(self.in_bounds(pos), "set_tile out of bounds: {}", pos);
        self.cells[pos.row as usize][pos.col as usize] = Some(tile);
    }

    /// Remove a tile again: rollback of a tentative placement.
    pub fn clear_tile(&mut self, pos: Pos) {
        assert!(self.in_bounds(pos), "clear_tile out of bounds: {}", pos);
        self.cells[pos.row as usize][pos.col as usize] = None;
    }

    /// True if `pos` is on the board and empty.
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.tile(pos).is_none()
    }

    /// True if `pos` is on the board and holds a tile.
    pub fn is_filled(&self, pos: Pos) -> bool {
        self.tile(pos).is_some()
    }

    /// True until the first play is committed.
    pub fn is_first_turn(&self) -> bool {
        self.positions().all(|pos| self.tile(pos).is_none())
    }

    /// Multiplier for a new tile placed at `pos`.
    pub fn letter_multiplier(&self, pos: Pos) -> u32 {
        assert!(self.in_bounds(pos), "multiplier out of bounds: {}", pos);
        self.grid[pos.row as usize][pos.col as usize].letter_multiplier()
    }

    /// Word multiplier earned by placing a new tile at `pos`.
    pub fn word_multiplier(&self, pos: Pos) -> u32 {
        assert!(self.in_bounds(pos), "multiplier out of bounds: {}", pos);
        self.grid[pos.row as usize][pos.col as usize].word_multiplier()
    }

    /// The premium layout in use.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Iterate over all board coordinates, row major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        (0..N as i32).flat_map(|row| (0..N as i32).map(move |col| Pos::new(row, col)))
    }

    /// Commit the newly placed tiles of a play to the board, skipping over
    /// cells that already hold a tile. This is the single mutation path by
    /// which a selected play is applied; no legality check is performed
    /// here (see [`score_play`](crate::score_play)).
    pub fn play_unchecked(&mut self, pos: Position, tiles: &[Tile]) {
        let mut cursor = pos.start;
        for &tile in tiles {
            while self.is_filled(cursor) {
                cursor = cursor.after(pos.dir);
            }
            self.set_tile(cursor, tile);
            cursor = cursor.after(pos.dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::parse_word;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        ".......D.......",
        "......HOWL.....",
        ".......G.......",
        ".......s.......",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ];

    #[test]
    fn test_state_from_strings() -> Result<()> {
        let board = Board::new().with_state_from_strings(TEST_STATE)?;
        assert!(board.is_filled(Pos::new(7, 6)));
        assert!(board.is_empty(Pos::new(0, 0)));
        assert_eq!(board.tile(Pos::new(7, 7)).unwrap().as_char(), 'O');
        let blank = board.tile(Pos::new(9, 7)).unwrap();
        assert!(blank.is_blank());
        assert_eq!(blank.points(), 0);
        assert!(!board.is_first_turn());
        assert_eq!(board.to_string(), TEST_STATE.join("\n"));
        Ok(())
    }

    #[test]
    fn test_bad_state() {
        let board = Board::new();
        assert!(board
            .clone()
            .with_state_from_strings(&["..............."])
            .is_err());
        let mut rows = vec!["..............."; 15];
        rows[3] = "..........";
        assert!(board.clone().with_state_from_strings(&rows).is_err());
        rows[3] = "......#........";
        assert!(board.with_state_from_strings(&rows).is_err());
    }

    #[test]
    fn test_bounds() {
        let board = Board::new();
        assert!(board.is_first_turn());
        assert!(!board.in_bounds(Pos::new(-1, 0)));
        assert!(!board.in_bounds(Pos::new(0, 15)));
        assert!(!board.is_empty(Pos::new(-1, 0)));
        assert!(!board.is_filled(Pos::new(15, 15)));
        assert_eq!(board.tile(Pos::new(-1, 7)), None);
    }

    #[test]
    fn test_set_clear_roundtrip() -> Result<()> {
        let mut board = Board::new();
        let tile = parse_word("Q")?[0];
        board.set_tile(CENTER, tile);
        assert!(!board.is_first_turn());
        board.clear_tile(CENTER);
        assert!(board.is_first_turn());
        Ok(())
    }

    #[test]
    fn test_play_unchecked_skips_existing() -> Result<()> {
        let mut board = Board::new().with_state_from_strings(TEST_STATE)?;
        // GHOWLY: G lands before the existing HOWL, Y after it
        let tiles = parse_word("GY")?;
        board.play_unchecked(Position::new(Direction::Across, 7, 5), &tiles);
        assert_eq!(board.tile(Pos::new(7, 5)).unwrap().as_char(), 'G');
        assert_eq!(board.tile(Pos::new(7, 10)).unwrap().as_char(), 'Y');
        assert_eq!(board.tile(Pos::new(7, 7)).unwrap().as_char(), 'O');
        Ok(())
    }

    #[test]
    fn test_directions() {
        let pos = Pos::new(7, 7);
        assert_eq!(pos.after(Direction::Across), Pos::new(7, 8));
        assert_eq!(pos.before(Direction::Across), Pos::new(7, 6));
        assert_eq!(pos.after_cross(Direction::Across), Pos::new(8, 7));
        assert_eq!(pos.before_cross(Direction::Down), Pos::new(7, 6));
        assert_eq!(Direction::Across.cross(), Direction::Down);
    }
}
