use crate::board::{Board, Direction, Pos, Position, CENTER, N};
use crate::crosscheck::CrossChecks;
use crate::lexicon::{Lexicon, NodeId};
use crate::rack::Rack;
use crate::score::{score_play, Play};
use crate::tiles::{Letter, Word};
#[cfg(feature = "flame_it")]
use flamer::flame;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A placement found by the search: the newly placed tiles only, in play
/// order, and where the first of them lands. Candidates are raw search
/// output; [`score_play`] validates and scores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Position,
    pub tiles: Word,
}

type AnchorGrid = [[bool; N]; N];

/// Generates every legal placement of rack tiles on a board.
///
/// The search runs per anchor: an empty cell adjacent to an existing tile
/// (or the center cell, on the first turn). Every legal play must place a
/// tile on some anchor, so for each anchor the generator builds the part
/// of the word before it by walking the lexicon trie and the rack
/// together, then extends past it to the right, pruning each empty cell
/// with the precomputed cross-check set. Anchors are independent, so with
/// the `rayon` feature they are searched in parallel, each worker owning a
/// scratch copy of the rack.
///
/// ## Examples
/// ```
/// # use scrabble_solver::{Board, Lexicon, MoveGenerator, Rack, Error};
/// # use std::convert::TryFrom;
/// let board = Board::new();
/// let lexicon = Lexicon::from_words(&["CAB"])?;
/// let rack = Rack::try_from("BCA")?;
/// let generator = MoveGenerator::new(&board, &lexicon);
/// // CAB through the center: 3 offsets in each direction
/// assert_eq!(generator.plays(&rack).len(), 6);
/// # Ok::<(), Error>(())
/// ```
pub struct MoveGenerator<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, lexicon: &'a Lexicon) -> MoveGenerator<'a> {
        MoveGenerator { board, lexicon }
    }

    /// The anchor cells of the current board: every empty cell next to a
    /// tile. On the first turn the center cell is the only anchor.
    pub fn anchors(&self) -> Vec<Pos> {
        if self.board.is_first_turn() {
            return vec![CENTER];
        }
        self.board
            .positions()
            .filter(|&pos| {
                self.board.is_empty(pos)
                    && [
                        pos.before(Direction::Across),
                        pos.after(Direction::Across),
                        pos.before(Direction::Down),
                        pos.after(Direction::Down),
                    ]
                    .iter()
                    .any(|&neighbor| self.board.is_filled(neighbor))
            })
            .collect()
    }

    /// Run the search in both directions and collect every candidate
    /// placement of tiles from `rack`. The same board word may be found
    /// through different anchors; duplicates are not removed here.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn candidates(&self, rack: &Rack) -> Vec<Candidate> {
        let anchors = self.anchors();
        let mut anchor_grid = [[false; N]; N];
        for anchor in &anchors {
            anchor_grid[anchor.row as usize][anchor.col as usize] = true;
        }
        let mut found = Vec::new();
        for &dir in &[Direction::Across, Direction::Down] {
            let checks = CrossChecks::compute(self.board, self.lexicon, dir);
            found.extend(self.search_direction(rack, dir, &checks, &anchor_grid, &anchors));
        }
        found
    }

    #[cfg(feature = "rayon")]
    fn search_direction(
        &self,
        rack: &Rack,
        dir: Direction,
        checks: &CrossChecks,
        anchor_grid: &AnchorGrid,
        anchors: &[Pos],
    ) -> Vec<Candidate> {
        anchors
            .par_iter()
            .flat_map(|&anchor| self.search_anchor(rack.clone(), dir, checks, anchor_grid, anchor))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn search_direction(
        &self,
        rack: &Rack,
        dir: Direction,
        checks: &CrossChecks,
        anchor_grid: &AnchorGrid,
        anchors: &[Pos],
    ) -> Vec<Candidate> {
        anchors
            .iter()
            .flat_map(|&anchor| self.search_anchor(rack.clone(), dir, checks, anchor_grid, anchor))
            .collect()
    }

    fn search_anchor(
        &self,
        rack: Rack,
        dir: Direction,
        checks: &CrossChecks,
        anchor_grid: &AnchorGrid,
        anchor: Pos,
    ) -> Vec<Candidate> {
        let mut search = AnchorSearch {
            board: self.board,
            lexicon: self.lexicon,
            checks,
            anchor_grid,
            dir,
            rack,
            found: Vec::new(),
        };
        search.run(anchor);
        search.found
    }

    /// Generate, validate and score all legal plays for `rack`.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn plays(&self, rack: &Rack) -> Vec<Play> {
        self.candidates(rack)
            .iter()
            .filter_map(|c| score_play(self.board, self.lexicon, &c.tiles, c.pos, true).ok())
            .collect()
    }
}

/// Depth-first search state for one anchor in one direction.
struct AnchorSearch<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    checks: &'a CrossChecks,
    anchor_grid: &'a AnchorGrid,
    dir: Direction,
    rack: Rack,
    found: Vec<Candidate>,
}

impl AnchorSearch<'_> {
    fn run(&mut self, anchor: Pos) {
        if self.board.is_filled(anchor.before(self.dir)) {
            // the word part before the anchor is forced by the board
            let mut scan = anchor.before(self.dir);
            let mut prefix = Word::new();
            while let Some(tile) = self.board.tile(scan) {
                prefix.insert(0, tile);
                scan = scan.before(self.dir);
            }
            let letters: Vec<Letter> = prefix.iter().map(|tile| tile.letter()).collect();
            if let Some(node) = self.lexicon.lookup_letters(&letters) {
                let mut word = prefix;
                self.extend_right(&mut word, node, anchor, false);
            }
        } else {
            // the word part before the anchor comes from the rack; it may
            // reach back over empty cells, but not past another anchor,
            // whose plays are found from that anchor instead
            let mut limit = 0;
            let mut scan = anchor;
            while self.board.is_empty(scan.before(self.dir))
                && !self.is_anchor(scan.before(self.dir))
            {
                limit += 1;
                scan = scan.before(self.dir);
            }
            let mut word = Word::new();
            self.extend_left(&mut word, self.lexicon.root(), anchor, limit);
        }
    }

    fn is_anchor(&self, pos: Pos) -> bool {
        self.board.in_bounds(pos) && self.anchor_grid[pos.row as usize][pos.col as usize]
    }

    /// Try every word start of up to `limit` rack tiles ending just before
    /// `anchor`, extending each one rightwards from the anchor.
    fn extend_left(&mut self, word: &mut Word, node: NodeId, anchor: Pos, limit: usize) {
        self.extend_right(word, node, anchor, false);
        if limit == 0 {
            return;
        }
        let lexicon = self.lexicon;
        for (letter, child) in lexicon.children(node) {
            if let Some(tile) = self.rack.take(letter) {
                word.push(tile);
                self.extend_left(word, child, anchor, limit - 1);
                word.pop();
                self.rack.put_back(tile);
            }
        }
    }

    /// Extend `word` over the cell `next` and onwards: follow the forced
    /// trie edge over an existing tile, or try every rack tile the cross
    /// checks allow on an empty cell. Record a candidate whenever the trie
    /// node is terminal, the word has covered its anchor, and the word
    /// cannot be extended by a tile already on the board.
    fn extend_right(&mut self, word: &mut Word, node: NodeId, next: Pos, anchor_covered: bool) {
        if !self.board.is_filled(next) && anchor_covered && self.lexicon.is_terminal(node) {
            self.record(word, next.before(self.dir));
        }
        if !self.board.in_bounds(next) {
            return;
        }
        if let Some(existing) = self.board.tile(next) {
            if let Some(child) = self.lexicon.child(node, existing.letter()) {
                word.push(existing);
                self.extend_right(word, child, next.after(self.dir), true);
                word.pop();
            }
        } else {
            let allowed = self.checks.allowed(next);
            let lexicon = self.lexicon;
            for (letter, child) in lexicon.children(node) {
                if !allowed.contains(letter) {
                    continue;
                }
                if let Some(tile) = self.rack.take(letter) {
                    word.push(tile);
                    self.extend_right(word, child, next.after(self.dir), true);
                    word.pop();
                    self.rack.put_back(tile);
                }
            }
        }
    }

    /// `word` spells out a complete word whose last tile sits on `last`;
    /// walk back over its cells to find the newly placed tiles and the
    /// cell of the first of them.
    fn record(&mut self, word: &Word, last: Pos) {
        let mut placed = Word::new();
        let mut start = last;
        let mut pos = last;
        for i in (0..word.len()).rev() {
            if self.board.is_empty(pos) {
                placed.insert(0, word[i]);
                start = pos;
            }
            pos = pos.before(self.dir);
        }
        self.found.push(Candidate {
            pos: Position {
                dir: self.dir,
                start,
            },
            tiles: placed,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tiles::Tile;
    use std::collections::BTreeSet;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &["AB", "ABS", "BA", "BAS", "CAB", "CABS", "SCAB"];

    fn empty_rows() -> Vec<String> {
        vec![String::from("..............."); 15]
    }

    /// The cells a play covers with new tiles, skipping existing ones.
    fn placed_cells(board: &Board, pos: Position, count: usize) -> Vec<Pos> {
        let mut cells = Vec::new();
        let mut cursor = pos.start;
        while cells.len() < count {
            if board.is_empty(cursor) {
                cells.push(cursor);
            }
            cursor = cursor.after(pos.dir);
        }
        cells
    }

    /// All distinct legal plays as (word, placed cells, score), found by
    /// trying every tile sequence at every position in both directions.
    fn brute_force(board: &Board, lexicon: &Lexicon, tiles: &[Tile]) -> BTreeSet<(String, Vec<Pos>, u32)> {
        let mut found = BTreeSet::new();
        for seq in sequences(tiles) {
            for &dir in &[Direction::Across, Direction::Down] {
                for start in board.positions() {
                    let pos = Position { dir, start };
                    if let Ok(play) = score_play(board, lexicon, &seq, pos, true) {
                        found.insert((play.word, placed_cells(board, pos, seq.len()), play.score));
                    }
                }
            }
        }
        found
    }

    /// Every permutation of every non-empty subset of `tiles`.
    fn sequences(tiles: &[Tile]) -> Vec<Vec<Tile>> {
        fn recurse(
            tiles: &[Tile],
            used: &mut Vec<bool>,
            current: &mut Vec<Tile>,
            out: &mut Vec<Vec<Tile>>,
        ) {
            for i in 0..tiles.len() {
                if used[i] {
                    continue;
                }
                used[i] = true;
                current.push(tiles[i]);
                out.push(current.clone());
                recurse(tiles, used, current, out);
                current.pop();
                used[i] = false;
            }
        }
        let mut out = Vec::new();
        recurse(
            tiles,
            &mut vec![false; tiles.len()],
            &mut Vec::new(),
            &mut out,
        );
        out
    }

    fn generated(board: &Board, lexicon: &Lexicon, rack: &Rack) -> BTreeSet<(String, Vec<Pos>, u32)> {
        let generator = MoveGenerator::new(board, lexicon);
        generator
            .candidates(rack)
            .iter()
            .filter_map(|c| {
                score_play(board, lexicon, &c.tiles, c.pos, true)
                    .ok()
                    .map(|play| (play.word, placed_cells(board, c.pos, c.tiles.len()), play.score))
            })
            .collect()
    }

    fn rack_tiles(rack: &str) -> Vec<Tile> {
        rack.chars().map(|c| Tile::try_from(c).unwrap()).collect()
    }

    #[test]
    fn test_first_turn_anchor_is_center() -> Result<()> {
        let board = Board::new();
        let lexicon = Lexicon::from_words(WORDS)?;
        let generator = MoveGenerator::new(&board, &lexicon);
        assert_eq!(generator.anchors(), vec![CENTER]);
        Ok(())
    }

    #[test]
    fn test_anchors_surround_tiles() -> Result<()> {
        let mut rows = empty_rows();
        rows[7] = String::from(".......A.......");
        let board = Board::new().with_state_from_strings(&rows)?;
        let lexicon = Lexicon::from_words(WORDS)?;
        let generator = MoveGenerator::new(&board, &lexicon);
        let anchors: BTreeSet<Pos> = generator.anchors().into_iter().collect();
        let expected: BTreeSet<Pos> = [
            Pos::new(6, 7),
            Pos::new(8, 7),
            Pos::new(7, 6),
            Pos::new(7, 8),
        ]
        .iter()
        .copied()
        .collect();
        assert_eq!(anchors, expected);
        Ok(())
    }

    #[test]
    fn test_first_turn_finds_all_plays() -> Result<()> {
        let board = Board::new();
        let lexicon = Lexicon::from_words(WORDS)?;
        let rack = Rack::try_from("ABC")?;
        let expected = brute_force(&board, &lexicon, &rack_tiles("ABC"));
        assert!(!expected.is_empty());
        assert_eq!(generated(&board, &lexicon, &rack), expected);
        Ok(())
    }

    #[test]
    fn test_midgame_finds_all_plays() -> Result<()> {
        let lexicon = Lexicon::from_words(WORDS)?;
        let mut rows = empty_rows();
        rows[7] = String::from(".....CAB.......");
        let board = Board::new().with_state_from_strings(&rows)?;
        let rack = Rack::try_from("ABS")?;
        let expected = brute_force(&board, &lexicon, &rack_tiles("ABS"));
        assert!(!expected.is_empty());
        assert_eq!(generated(&board, &lexicon, &rack), expected);
        Ok(())
    }

    #[test]
    fn test_hook_play() -> Result<()> {
        // S hooked onto CAB through the anchor right of the B
        let lexicon = Lexicon::from_words(&["CAB", "CABS"])?;
        let mut rows = empty_rows();
        rows[7] = String::from(".....CAB.......");
        let board = Board::new().with_state_from_strings(&rows)?;
        let rack = Rack::try_from("S")?;
        let generator = MoveGenerator::new(&board, &lexicon);
        let plays = generator.plays(&rack);
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].word, "CABS");
        assert_eq!(plays[0].pos, Position::new(Direction::Across, 7, 8));
        Ok(())
    }

    #[test]
    fn test_cross_checks_prune_illegal_words() -> Result<()> {
        // a tile under the A must form a word with it; the rack only
        // offers letters that can not
        let lexicon = Lexicon::from_words(&["AB", "BA"])?;
        let mut rows = empty_rows();
        rows[7] = String::from(".......A.......");
        let board = Board::new().with_state_from_strings(&rows)?;
        let rack = Rack::try_from("CD")?;
        let generator = MoveGenerator::new(&board, &lexicon);
        assert!(generator.plays(&rack).is_empty());
        Ok(())
    }

    #[test]
    fn test_blank_plays() -> Result<()> {
        let board = Board::new();
        let lexicon = Lexicon::from_words(&["AB", "BA"])?;
        let rack = Rack::try_from("A*")?;
        let generator = MoveGenerator::new(&board, &lexicon);
        let plays = generator.plays(&rack);
        // Ab and bA, 2 offsets through the center, both directions
        assert_eq!(plays.len(), 8);
        for play in &plays {
            assert!(play.word == "Ab" || play.word == "bA", "{}", play.word);
            // the blank scores nothing, the center doubles the A
            assert_eq!(play.score, 2);
            assert_eq!(play.blanks.len(), 1);
        }
        Ok(())
    }

    #[test]
    fn test_rack_restored_after_search() -> Result<()> {
        let board = Board::new();
        let lexicon = Lexicon::from_words(WORDS)?;
        let rack = Rack::try_from("ABC*")?;
        let generator = MoveGenerator::new(&board, &lexicon);
        generator.plays(&rack);
        assert_eq!(rack.len(), 4);
        Ok(())
    }
}
