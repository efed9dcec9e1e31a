//! Exhaustive minimax search with a transposition cache

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Board, Move, Player};

/// Outcome of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Best move for the player to move; `None` on terminal boards
    pub best_move: Option<Move>,
    /// Game-theoretic value under optimal play: 1 X wins, -1 O wins, 0 draw
    pub value: i32,
}

/// Minimax solver that remembers every position it has evaluated.
///
/// Moves are tried in row-major order and the first move reaching the best
/// value is kept, so results are deterministic. X maximizes, O minimizes.
///
/// # Examples
///
/// ```
/// use minimax_pagerank::tictactoe::{Board, Move, Solver};
///
/// let board = Board::from_string("XX.|OO.|...").unwrap();
/// let mut solver = Solver::new();
/// assert_eq!(solver.best_move(&board), Some(Move { row: 0, col: 2 }));
/// assert_eq!(solver.value(&board), 1);
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    cache: HashMap<Board, Evaluation>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `board` to the end of the game.
    pub fn evaluate(&mut self, board: &Board) -> Evaluation {
        if let Some(&evaluation) = self.cache.get(board) {
            return evaluation;
        }

        let evaluation = if board.is_terminal() {
            Evaluation {
                best_move: None,
                value: board.utility(),
            }
        } else {
            self.search_children(board)
        };

        self.cache.insert(*board, evaluation);
        evaluation
    }

    fn search_children(&mut self, board: &Board) -> Evaluation {
        let maximizing = board.player() == Player::X;
        let bound = if maximizing { 1 } else { -1 };
        let mut best: Option<(Move, i32)> = None;

        for (mv, next) in board.successors() {
            let value = self.evaluate(&next).value;

            let improves = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((mv, value));
            }

            // A win for the mover cannot be improved on.
            if value == bound {
                break;
            }
        }

        match best {
            Some((mv, value)) => Evaluation {
                best_move: Some(mv),
                value,
            },
            None => Evaluation {
                best_move: None,
                value: board.utility(),
            },
        }
    }

    /// Optimal move for the player to move, `None` iff the board is terminal.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let evaluation = self.evaluate(board);
        debug!(
            "best move for {} on {}: {:?} (value {}, {} cached positions)",
            board.player(),
            board.encode(),
            evaluation.best_move,
            evaluation.value,
            self.cache.len()
        );
        evaluation.best_move
    }

    /// Game-theoretic value of `board`.
    pub fn value(&mut self, board: &Board) -> i32 {
        self.evaluate(board).value
    }

    /// Value reached by each legal move, in row-major order.
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }

        board
            .successors()
            .map(|(mv, next)| (mv, self.evaluate(&next).value))
            .collect()
    }

    /// Number of positions in the cache
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_immediate_win_for_x() {
        let board = Board::from_string("XX.|OO.|...").unwrap();
        assert_eq!(board.player(), Player::X);

        let mut solver = Solver::new();
        let evaluation = solver.evaluate(&board);
        assert_eq!(evaluation.best_move, Some(mv(0, 2)));
        assert_eq!(evaluation.value, 1);
    }

    #[test]
    fn test_immediate_win_for_o() {
        let board = Board::from_string("XX.|OO.|X..").unwrap();
        assert_eq!(board.player(), Player::O);

        let mut solver = Solver::new();
        let evaluation = solver.evaluate(&board);
        assert_eq!(evaluation.best_move, Some(mv(1, 2)));
        assert_eq!(evaluation.value, -1);
    }

    #[test]
    fn test_o_blocks_threat() {
        let board = Board::from_string("XX.|.O.|...").unwrap();
        let mut solver = Solver::new();
        assert_eq!(solver.best_move(&board), Some(mv(0, 2)));
        assert_eq!(solver.value(&board), 0);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_string("XXX|OO.|...").unwrap();
        let mut solver = Solver::new();
        let evaluation = solver.evaluate(&board);
        assert_eq!(evaluation.best_move, None);
        assert_eq!(evaluation.value, 1);
        assert!(solver.evaluate_moves(&board).is_empty());
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut solver = Solver::new();
        assert_eq!(solver.value(&Board::new()), 0);
        assert!(solver.best_move(&Board::new()).is_some());
    }

    #[test]
    fn test_evaluate_moves_covers_every_action() {
        let board = Board::from_string("XX.|OO.|...").unwrap();
        let mut solver = Solver::new();
        let moves = solver.evaluate_moves(&board);
        assert_eq!(moves.len(), board.actions().len());
        assert_eq!(moves[0], (mv(0, 2), 1));
    }

    #[test]
    fn test_cache_is_reused() {
        let mut solver = Solver::new();
        solver.evaluate(&Board::new());
        let cached = solver.cache_len();
        assert!(cached > 0);

        let board = Board::new().result(mv(1, 1)).unwrap();
        solver.evaluate(&board);
        assert_eq!(solver.cache_len(), cached);
    }
}
