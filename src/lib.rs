//! A scrabble move generation library for Rust.
//! <br>
//! This crate finds every legal play given a scrabble board and a rack of
//! tiles, and scores them. It can be used to study strategies in the game,
//! or just to cheat.
//! The search is anchor based: the board is reduced to the handful of
//! cells a new word must pass through, and the dictionary trie and the
//! rack are walked together from each of them, so only letters that can
//! still form a word are ever tried.
//! It can use the `rayon` crate to search the anchors in parallel.
//!
//! # How to use `scrabble_solver`
//! Start by creating a board and a [`Lexicon`], then hand them to a
//! [`MoveGenerator`] together with a [`Rack`]. By default the standard
//! premium layout is used, but you can specify your own with
//! [`Board::with_grid_from_strings`]. The word list must be in utf-8 with
//! one word per line; anything after the first whitespace on a line (such
//! as a definition) is ignored.
//!
//! # Basic usage
//! ```
//! # use scrabble_solver::{Board, Lexicon, MoveGenerator, Rack, Error};
//! # use std::convert::TryFrom;
//! let mut board = Board::new();
//! let lexicon = Lexicon::from_words(&["RUST", "RUTS"])?;
//! let rack = Rack::try_from("TSURX")?;
//! let generator = MoveGenerator::new(&board, &lexicon);
//! let mut plays = generator.plays(&rack);
//! // 2 words, 4 offsets through the center, 2 directions
//! assert_eq!(plays.len(), 16);
//! plays.sort();
//! let best = plays.last().unwrap();
//! println!("{}", best);
//! board.play_unchecked(best.pos, &scrabble_solver::parse_word(&best.word)?);
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod crosscheck;
mod error;
mod grid;
mod letterset;
mod lexicon;
mod movegen;
mod rack;
mod score;
mod tiles;

pub use crate::board::{Board, Direction, Pos, Position, CENTER, N};
pub use crate::crosscheck::CrossChecks;
pub use crate::error::Error;
pub use crate::grid::{Grid, Premium};
pub use crate::letterset::LetterSet;
pub use crate::lexicon::{Lexicon, NodeId};
pub use crate::movegen::{Candidate, MoveGenerator};
pub use crate::rack::{Rack, RackTile};
pub use crate::score::{score_play, Play, BINGO_BONUS};
pub use crate::tiles::{parse_word, word_to_string, Letter, Tile, Word};
