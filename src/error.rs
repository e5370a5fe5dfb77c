use thiserror::Error;

use crate::COLUMNS;

/// Errors raised by the engine when a caller breaks a move or search contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Invalid move, column {column} is full or outside 0..{}", COLUMNS)]
    InvalidMove { column: usize },

    #[error("could not parse '{character}' as a valid move")]
    InvalidMoveString { character: char },

    #[error("no legal moves remain on the board")]
    NoLegalMoves,

    #[error("the game is already over")]
    GameOver,
}
