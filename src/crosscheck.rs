use crate::board::{Board, Direction, Pos, N};
use crate::letterset::LetterSet;
use crate::lexicon::Lexicon;
use crate::tiles::Letter;
#[cfg(feature = "flame_it")]
use flamer::flame;

/// Per-cell sets of letters that may legally be placed during generation
/// in one direction: a letter is allowed iff it completes a valid word
/// with the tiles adjacent in the perpendicular direction.
///
/// Computed once per direction per generation pass, immutable afterwards,
/// and safe to share read-only across search workers. Must be recomputed
/// whenever the board changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossChecks {
    dir: Direction,
    allowed: [[LetterSet; N]; N],
}

impl CrossChecks {
    /// Compute the cross-check table for plays in `dir`.
    ///
    /// A cell with no perpendicular neighbors allows the full alphabet;
    /// a filled cell allows nothing.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn compute(board: &Board, lexicon: &Lexicon, dir: Direction) -> CrossChecks {
        let mut allowed = [[LetterSet::new(); N]; N];
        for pos in board.positions() {
            allowed[pos.row as usize][pos.col as usize] = allowed_at(board, lexicon, dir, pos);
        }
        CrossChecks { dir, allowed }
    }

    /// The generation direction this table was computed for.
    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// The set of letters that may be placed at `pos`.
    pub fn allowed(&self, pos: Pos) -> LetterSet {
        assert!(
            pos.row >= 0 && pos.row < N as i32 && pos.col >= 0 && pos.col < N as i32,
            "cross check out of bounds: {}",
            pos
        );
        self.allowed[pos.row as usize][pos.col as usize]
    }
}

fn allowed_at(board: &Board, lexicon: &Lexicon, dir: Direction, pos: Pos) -> LetterSet {
    if board.is_filled(pos) {
        return LetterSet::new();
    }
    let mut before: Vec<Letter> = Vec::new();
    let mut scan = pos;
    while let Some(tile) = board.tile(scan.before_cross(dir)) {
        scan = scan.before_cross(dir);
        before.insert(0, tile.letter());
    }
    let mut after: Vec<Letter> = Vec::new();
    let mut scan = pos;
    while let Some(tile) = board.tile(scan.after_cross(dir)) {
        scan = scan.after_cross(dir);
        after.push(tile.letter());
    }
    if before.is_empty() && after.is_empty() {
        // no perpendicular constraint exists here yet
        return LetterSet::ALL;
    }
    let mut legal = LetterSet::new();
    let mut probe = Vec::with_capacity(before.len() + 1 + after.len());
    for letter in Letter::alphabet() {
        probe.clear();
        probe.extend_from_slice(&before);
        probe.push(letter);
        probe.extend_from_slice(&after);
        if lexicon.is_word_letters(&probe) {
            legal.insert(letter);
        }
    }
    legal
}
