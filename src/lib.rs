//! A computer opponent for the board game 'Connect 4'
//!
//! The opponent picks its moves with a depth-limited minimax search using
//! alpha-beta pruning, scoring the positions at the search horizon with a
//! heuristic that counts open length-4 windows.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Player}, solver::best_move, SEARCH_DEPTH};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the human has three pieces lined up in the bottom row
//! let board = Board::from_moves("06162", Player::Human)?;
//! let result = best_move(&board, Player::Computer, SEARCH_DEPTH)?;
//!
//! // the computer must block the fourth
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod rules;

pub mod evaluation;

pub mod solver;


pub use board::{Board, Cell, Player};
pub use error::EngineError;

/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLUMNS: usize = 7;

/// The default number of plies searched by the computer player
pub const SEARCH_DEPTH: u32 = 4;

// a four-in-a-row has to fit in both directions
const_assert!(ROWS >= 4 && COLUMNS >= 4);
