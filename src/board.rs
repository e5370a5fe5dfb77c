use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::{stdout, Write};

use crate::{error::EngineError, rules, COLUMNS, ROWS};

/// One of the two sides in a match
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Taken(player)
    }
}

/// A Connect 4 grid
///
/// Cells are stored bottom-to-top, so row 0 is where a piece dropped into an
/// empty column lands. Pieces never float: a cell is only occupied if every
/// cell below it in the same column is occupied.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }

    /// Creates a board by replaying a string of zero-indexed column digits,
    /// alternating between players starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Player) -> Result<Self, EngineError> {
        let mut board = Self::new();
        let mut player = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    rules::apply_move(&mut board, column as usize, player)?;
                    player = player.opponent();
                }
                None => {
                    return Err(EngineError::InvalidMoveString {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Counts the cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn is_full_column(&self, column: usize) -> bool {
        !self.cells[ROWS - 1][column].is_empty()
    }

    /// Returns the row a piece dropped into `column` would land on, or `None`
    /// if the column is full
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][column].is_empty())
    }

    /// Puts a piece on the given cell without checking the move.
    ///
    /// Callers get `row` from [`Board::landing_row`]; use [`rules::apply_move`]
    /// for a checked drop.
    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        debug_assert!(
            row == 0 || !self.cells[row - 1][column].is_empty(),
            "piece placed above an empty cell"
        );
        self.cells[row][column] = Cell::from(player);
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (0..COLUMNS).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        // top row first
        for row in self.cells.iter().rev() {
            for cell in row.iter() {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::Taken(Player::Human) => Color::Red,
                            Cell::Taken(Player::Computer) => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Taken(Player::Human) => 'X',
                    Cell::Taken(Player::Computer) => 'O',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
