//! Move legality, win detection and game state queries over a [`Board`]

use crate::{
    board::{Board, Cell, Player},
    error::EngineError,
    COLUMNS, ROWS,
};

/// Four cells in a line, in board order
pub type Window = [Cell; 4];

/// The number of distinct length-4 lines on the board
pub const NUM_WINDOWS: usize =
    ROWS * (COLUMNS - 3) + (ROWS - 3) * COLUMNS + 2 * (ROWS - 3) * (COLUMNS - 3);

/// `(row, column)` coordinates of every length-4 line on the board
pub const WINDOWS: [[(usize, usize); 4]; NUM_WINDOWS] = windows_table();

/// Builds the window table: horizontal, vertical, diagonal `/` then diagonal `\`
const fn windows_table() -> [[(usize, usize); 4]; NUM_WINDOWS] {
    let mut table = [[(0, 0); 4]; NUM_WINDOWS];
    let mut n = 0;

    // horizontal
    let mut row = 0;
    while row < ROWS {
        let mut column = 0;
        while column + 3 < COLUMNS {
            let mut i = 0;
            while i < 4 {
                table[n][i] = (row, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    let mut column = 0;
    while column < COLUMNS {
        let mut row = 0;
        while row + 3 < ROWS {
            let mut i = 0;
            while i < 4 {
                table[n][i] = (row + i, column);
                i += 1;
            }
            n += 1;
            row += 1;
        }
        column += 1;
    }

    // both diagonals start from the same bottom-left corners
    let mut row = 0;
    while row + 3 < ROWS {
        let mut column = 0;
        while column + 3 < COLUMNS {
            let mut i = 0;
            while i < 4 {
                table[n][i] = (row + i, column + i);
                table[n + 1][i] = (row + 3 - i, column + i);
                i += 1;
            }
            n += 2;
            column += 1;
        }
        row += 1;
    }

    table
}

/// Iterates over the contents of every length-4 line on the board
pub fn windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    WINDOWS.iter().map(move |coords| {
        let mut window = [Cell::Empty; 4];
        for (cell, &(row, column)) in window.iter_mut().zip(coords.iter()) {
            *cell = board.get(row, column);
        }
        window
    })
}

/// The result of a match so far
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

pub fn is_valid_move(board: &Board, column: usize) -> bool {
    column < COLUMNS && !board.is_full_column(column)
}

/// Returns the playable columns in ascending order
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..COLUMNS)
        .filter(|&column| !board.is_full_column(column))
        .collect()
}

/// Drops a piece for `player` into `column`, returning the row it landed on
///
/// The board is left untouched if the column is out of range or full.
pub fn apply_move(
    board: &mut Board,
    column: usize,
    player: Player,
) -> Result<usize, EngineError> {
    if column >= COLUMNS {
        return Err(EngineError::InvalidMove { column });
    }
    let row = board
        .landing_row(column)
        .ok_or(EngineError::InvalidMove { column })?;
    board.place(row, column, player);
    Ok(row)
}

/// Checks for four of `player`'s pieces in a line in any direction
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = Cell::from(player);
    WINDOWS.iter().any(|coords| {
        coords
            .iter()
            .all(|&(row, column)| board.get(row, column) == target)
    })
}

/// True once either player has won or the board is full
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Player::Human)
        || has_won(board, Player::Computer)
        || legal_moves(board).is_empty()
}

pub fn game_state(board: &Board) -> GameState {
    if has_won(board, Player::Human) {
        GameState::Won(Player::Human)
    } else if has_won(board, Player::Computer) {
        GameState::Won(Player::Computer)
    } else if legal_moves(board).is_empty() {
        GameState::Draw
    } else {
        GameState::Playing
    }
}
