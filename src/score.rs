use crate::board::{Board, Pos, Position, CENTER};
use crate::error::Error;
use crate::lexicon::Lexicon;
use crate::tiles::{word_to_string, Letter, Tile, Word};
#[cfg(feature = "flame_it")]
use flamer::flame;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Bonus for playing a full rack of 7 tiles in one turn.
pub const BINGO_BONUS: u32 = 50;

const RACK_SIZE: usize = 7;

/// A fully validated, scored play.
///
/// Two plays are equal iff score, word and position are all equal, so
/// distinct plays that happen to score the same do not collapse. Ordering
/// uses the same keys, score first, so a sorted list ranks by score.
#[derive(Debug, Clone)]
pub struct Play {
    /// Total score, including perpendicular words and any bingo bonus.
    pub score: u32,
    /// The full word formed, including pre-existing tiles; blanks lowercase.
    pub word: String,
    /// Direction and the cell of the first newly placed tile.
    pub pos: Position,
    /// True if the play used all 7 rack tiles.
    pub bingo: bool,
    /// The cells within the word that hold a blank, newly placed or not.
    pub blanks: BTreeSet<Pos>,
}

impl PartialEq for Play {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.word == other.word && self.pos == other.pos
    }
}

impl Eq for Play {}

impl Ord for Play {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.score, &self.word, self.pos).cmp(&(other.score, &other.word, other.pos))
    }
}

impl PartialOrd for Play {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}, {} points", self.word, self.pos, self.score)?;
        if self.bingo {
            write!(f, " (bingo)")?;
        }
        Ok(())
    }
}

/// Validate and score the placement of `tiles` at `pos` on `board`.
///
/// `tiles` are the tiles to place, in play order, on the empty cells from
/// `pos.start` onward; existing tiles on the board are consumed in between
/// and become part of the word. `top_level` must be true when called by an
/// outside caller; the function calls itself with `top_level = false` to
/// score the perpendicular word completed by each newly placed tile.
///
/// Board multipliers apply to newly placed tiles only; pre-existing tiles
/// count their raw value. A blank is worth 0 wherever it lands. Placing
/// all 7 rack tiles earns the 50 point bingo bonus.
///
/// ## Errors
/// Every way a placement can be illegal is an ordinary error value:
/// starting on a filled cell, running off the board, failing to touch the
/// existing tiles (or the center cell, on the first turn), or forming a
/// word that is not in the lexicon. Callers probing many speculative
/// placements just discard the failures.
///
/// ## Examples
/// ```
/// # use scrabble_solver::{score_play, parse_word, Board, Direction, Lexicon, Position, Error};
/// let board = Board::new();
/// let lexicon = Lexicon::from_words(&["CAT"])?;
/// let tiles = parse_word("CAT")?;
/// let pos = Position::new(Direction::Across, 7, 7);
/// let play = score_play(&board, &lexicon, &tiles, pos, true)?;
/// // (3 + 1 + 1) doubled by the center square
/// assert_eq!(play.score, 10);
/// # Ok::<(), Error>(())
/// ```
#[cfg_attr(feature = "flame_it", flame)]
pub fn score_play(
    board: &Board,
    lexicon: &Lexicon,
    tiles: &[Tile],
    pos: Position,
    top_level: bool,
) -> Result<Play, Error> {
    let dir = pos.dir;
    let mut cursor = pos.start;
    if board.is_filled(cursor) {
        return Err(Error::StartsOnFilledTile(cursor));
    }
    let mut empties = 0;
    let mut scan = cursor;
    while board.in_bounds(scan) {
        if board.is_empty(scan) {
            empties += 1;
        }
        scan = scan.after(dir);
    }
    if empties < tiles.len() {
        return Err(Error::OutOfBounds(pos));
    }

    let mut word = Word::new();
    let mut score: u32 = 0;
    let mut word_multiplier: u32 = 1;
    let mut covers_center = false;
    let mut blanks = BTreeSet::new();
    let mut perpendicular: Vec<(Tile, Pos)> = Vec::new();
    let mut single_letter_score: u32 = 0;

    // pre-existing prefix tiles count their raw value, unmultiplied
    let mut has_prefix = false;
    let mut scan = cursor.before(dir);
    while let Some(tile) = board.tile(scan) {
        word.insert(0, tile);
        score += tile.points();
        has_prefix = true;
        if tile.is_blank() {
            blanks.insert(scan);
        }
        scan = scan.before(dir);
    }
    let mut crosses = has_prefix;

    for &tile in tiles {
        while let Some(existing) = board.tile(cursor) {
            word.push(existing);
            score += existing.points();
            crosses = true;
            if existing.is_blank() {
                blanks.insert(cursor);
            }
            cursor = cursor.after(dir);
        }
        word.push(tile);
        word_multiplier *= board.word_multiplier(cursor);
        score += tile.points() * board.letter_multiplier(cursor);
        if tile.is_blank() {
            blanks.insert(cursor);
        }
        if tiles.len() == 1 {
            single_letter_score = tile.points() * board.letter_multiplier(cursor);
        }
        if board.is_filled(cursor.before_cross(dir)) || board.is_filled(cursor.after_cross(dir)) {
            perpendicular.push((tile, cursor));
        }
        if cursor == CENTER {
            covers_center = true;
        }
        cursor = cursor.after(dir);
    }

    let mut has_suffix = false;
    while let Some(existing) = board.tile(cursor) {
        word.push(existing);
        score += existing.points();
        has_suffix = true;
        if existing.is_blank() {
            blanks.insert(cursor);
        }
        cursor = cursor.after(dir);
    }

    // A lone tile with no word around it in the play direction scores only
    // through its perpendicular word; back out its contribution here so it
    // is not counted twice.
    if !has_prefix && !has_suffix && tiles.len() == 1 {
        score -= single_letter_score;
    }

    score *= word_multiplier;
    if tiles.len() == RACK_SIZE {
        score += BINGO_BONUS;
    }

    if top_level && !crosses && !has_suffix && perpendicular.is_empty() {
        if board.is_first_turn() {
            if !covers_center {
                return Err(Error::MustStartAtCenter);
            }
        } else {
            return Err(Error::NoOverlap);
        }
    }

    let mut word_text = word_to_string(&word);
    if top_level {
        for &(tile, p) in &perpendicular {
            let cross = Position {
                dir: dir.cross(),
                start: p,
            };
            let sub = score_play(board, lexicon, &[tile], cross, false)?;
            score += sub.score;
            if word.len() == 1 {
                word_text = sub.word;
            }
        }
    }

    let letters: Vec<Letter> = word.iter().map(|tile| tile.letter()).collect();
    if !lexicon.is_word_letters(&letters) && !(word.len() == 1 && !perpendicular.is_empty()) {
        return Err(Error::NotInDictionary(word_to_string(&word)));
    }

    Ok(Play {
        score,
        word: word_text,
        pos,
        bingo: tiles.len() == RACK_SIZE,
        blanks,
    })
}
