//! A depth-limited minimax search for the computer player

use indicatif::ProgressBar;
use rayon::prelude::*;
use static_assertions::const_assert;
use tracing::{debug, trace};

use crate::{
    board::{Board, Player},
    error::EngineError,
    evaluation::{self, MAX_HEURISTIC},
    rules,
};

/// The score of a position won by the maximizing player
pub const WIN_SCORE: i32 = 1_000_000;

// a forced win or loss must outweigh any heuristic score
const_assert!(MAX_HEURISTIC < WIN_SCORE);

/// The outcome of a search: the column to play and the score it leads to
///
/// `column` is `None` only for positions that were scored without searching
/// any further, i.e. finished games and positions at the search horizon.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// A minimax searcher with alpha-beta pruning
///
/// # Position Scoring
/// Positions are always scored from the maximizing player's point of view.
/// A position that player has won scores [`WIN_SCORE`], a position the
/// opponent has won scores `-WIN_SCORE` and a drawn position scores 0.
/// Unfinished positions at the search horizon are scored with
/// [`evaluation::score`].
#[derive(Clone, Debug)]
pub struct Solver {
    maximizer: Player,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` that picks moves for `maximizer`
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            node_count: 0,
        }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Performs game tree search
    ///
    /// Moves are tried left to right and only a strictly better score replaces
    /// the current best, so ties go to the lowest column.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        if depth == 0 || rules::is_terminal(board) {
            let score = if rules::has_won(board, self.maximizer) {
                WIN_SCORE
            } else if rules::has_won(board, self.maximizer.opponent()) {
                -WIN_SCORE
            } else if rules::legal_moves(board).is_empty() {
                0
            } else {
                evaluation::score(board, self.maximizer)
            };
            return SearchResult {
                column: None,
                score,
            };
        }

        let moves = rules::legal_moves(board);
        let (player, mut value) = if maximizing {
            (self.maximizer, i32::MIN)
        } else {
            (self.maximizer.opponent(), i32::MAX)
        };
        // fall back to the first legal move in case no branch improves on the bound
        let mut column = moves.first().copied();

        for &candidate in moves.iter() {
            let mut next = *board;
            let row = match next.landing_row(candidate) {
                Some(row) => row,
                None => continue,
            };
            next.place(row, candidate, player);

            let score = self
                .minimax(&next, depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > value {
                    value = score;
                    column = Some(candidate);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = Some(candidate);
                }
                beta = beta.min(value);
            }
            // the other player will never let the game reach this branch
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column,
            score: value,
        }
    }

    /// Finds the best move for the maximizing player, searching `depth` plies
    pub fn solve(&mut self, board: &Board, depth: u32) -> Result<SearchResult, EngineError> {
        self.check_searchable(board)?;
        // a move needs at least one ply
        let depth = depth.max(1);

        let result = self.minimax(board, depth, i32::MIN, i32::MAX, true);
        debug!(
            player = ?self.maximizer,
            depth,
            column = ?result.column,
            score = result.score,
            nodes = self.node_count,
            "search complete"
        );
        Ok(result)
    }

    /// Finds the best move like [`Solver::solve`], searching each root move on
    /// its own thread
    ///
    /// Every root move is searched with a full window, so the result is the
    /// same as the sequential search. `progress` is advanced once per root move.
    pub fn solve_parallel(
        &mut self,
        board: &Board,
        depth: u32,
        progress: Option<&ProgressBar>,
    ) -> Result<SearchResult, EngineError> {
        let moves = self.check_searchable(board)?;
        let depth = depth.max(1);
        let maximizer = self.maximizer;

        let scores: Vec<(usize, i32, usize)> = moves
            .par_iter()
            .filter_map(|&column| {
                let mut next = *board;
                let row = next.landing_row(column)?;
                next.place(row, column, maximizer);

                let mut solver = Solver::new(maximizer);
                let score = solver
                    .minimax(&next, depth - 1, i32::MIN, i32::MAX, false)
                    .score;
                trace!(column, score, nodes = solver.node_count, "root move searched");

                if let Some(progress) = progress {
                    progress.inc(1);
                }
                Some((column, score, solver.node_count))
            })
            .collect();

        // results keep the column order, so the leftmost best move wins ties
        let mut result = SearchResult {
            column: moves.first().copied(),
            score: i32::MIN,
        };
        self.node_count += 1;
        for (column, score, nodes) in scores {
            self.node_count += nodes;
            if score > result.score {
                result = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }

        debug!(
            player = ?self.maximizer,
            depth,
            column = ?result.column,
            score = result.score,
            nodes = self.node_count,
            "parallel search complete"
        );
        Ok(result)
    }

    /// Returns the legal moves of a position that still has a move to find
    fn check_searchable(&self, board: &Board) -> Result<Vec<usize>, EngineError> {
        let moves = rules::legal_moves(board);
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }
        if rules::has_won(board, Player::Human) || rules::has_won(board, Player::Computer) {
            return Err(EngineError::GameOver);
        }
        Ok(moves)
    }
}

/// Finds the best move for `player`, searching `depth` plies
pub fn best_move(board: &Board, player: Player, depth: u32) -> Result<SearchResult, EngineError> {
    Solver::new(player).solve(board, depth)
}

/// Finds the best move for `player` with the root moves searched in parallel
pub fn best_move_parallel(
    board: &Board,
    player: Player,
    depth: u32,
) -> Result<SearchResult, EngineError> {
    Solver::new(player).solve_parallel(board, depth, None)
}
