//! Static evaluation of positions at the search horizon

use crate::{
    board::{Board, Cell, Player},
    rules::{self, Window, NUM_WINDOWS},
    COLUMNS, ROWS,
};

/// Bonus for each of the player's pieces in the center column
pub const CENTER_WEIGHT: i32 = 3;
/// A completed line. Terminal positions are caught by the search before this
/// is reached, so it only matters if the evaluator is used on its own
pub const FOUR_SCORE: i32 = 100;
pub const OPEN_THREE_SCORE: i32 = 5;
pub const OPEN_TWO_SCORE: i32 = 2;
/// Penalty for an opponent line that is one piece from completion
pub const OPPONENT_THREE_PENALTY: i32 = -4;

/// An upper bound on the absolute value of [`score`]
pub const MAX_HEURISTIC: i32 = NUM_WINDOWS as i32 * FOUR_SCORE + ROWS as i32 * CENTER_WEIGHT;

/// Scores a single length-4 line from `player`'s point of view
pub fn evaluate_window(window: &Window, player: Player) -> i32 {
    let own_cell = Cell::from(player);
    let opp_cell = Cell::from(player.opponent());

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.len() - own - opp;

    match (own, opp, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => OPEN_THREE_SCORE,
        (2, _, 2) => OPEN_TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_PENALTY,
        _ => 0,
    }
}

/// Scores a position from `player`'s point of view
///
/// Rewards pieces in the center column and every line that `player` could
/// still complete, and penalises lines the opponent is about to complete.
pub fn score(board: &Board, player: Player) -> i32 {
    let own_cell = Cell::from(player);

    let center = (0..ROWS)
        .filter(|&row| board.get(row, COLUMNS / 2) == own_cell)
        .count() as i32
        * CENTER_WEIGHT;

    center
        + rules::windows(board)
            .map(|window| evaluate_window(&window, player))
            .sum::<i32>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const H: Cell = Cell::Taken(Player::Human);
    const C: Cell = Cell::Taken(Player::Computer);
    const E: Cell = Cell::Empty;

    #[test]
    fn window_tiers() {
        let player = Player::Computer;
        assert_eq!(evaluate_window(&[C, C, C, C], player), 100);
        assert_eq!(evaluate_window(&[C, E, C, C], player), 5);
        assert_eq!(evaluate_window(&[E, C, C, E], player), 2);
        assert_eq!(evaluate_window(&[H, E, H, H], player), -4);
        assert_eq!(evaluate_window(&[C, E, E, E], player), 0);
        assert_eq!(evaluate_window(&[C, C, H, E], player), 0);
        assert_eq!(evaluate_window(&[H, H, E, E], player), 0);
        assert_eq!(evaluate_window(&[E, E, E, E], player), 0);
    }

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(score(&board, Player::Human), 0);
        assert_eq!(score(&board, Player::Computer), 0);
    }

    #[test]
    fn center_piece_scores_center_weight() -> Result<()> {
        let board = Board::from_moves("3", Player::Computer)?;
        // a lone piece makes no two-in-a-row, so only the center bonus counts
        assert_eq!(score(&board, Player::Computer), CENTER_WEIGHT);
        assert_eq!(score(&board, Player::Human), 0);
        Ok(())
    }

    #[test]
    fn open_two_in_bottom_row() -> Result<()> {
        // computer at columns 0 and 1, human stacked on column 0
        let board = Board::from_moves("001", Player::Computer)?;

        // only the window over columns 0..4 of row 0 holds two computer
        // pieces and two empty cells
        assert_eq!(score(&board, Player::Computer), OPEN_TWO_SCORE);
        Ok(())
    }

    #[test]
    fn opponent_threat_is_penalised() -> Result<()> {
        // human holds columns 0, 1 and 2 of the bottom row
        let board = Board::from_moves("06162", Player::Human)?;

        let human = score(&board, Player::Human);
        let computer = score(&board, Player::Computer);
        assert!(human > 0);
        assert!(computer < human);
        Ok(())
    }

    #[test]
    fn bound_covers_heuristic_range() {
        assert!(MAX_HEURISTIC < crate::solver::WIN_SCORE);
    }
}
