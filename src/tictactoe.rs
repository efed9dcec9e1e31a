//! Tic-Tac-Toe game engine and minimax solver

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod validation;

use std::collections::BTreeSet;

pub use board::{BOARD_SIZE, Board, Cell, Move, Player};
pub use game::{Game, GameOutcome, Turn};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{Evaluation, Solver};

/// Starting position: nine empty cells.
pub fn initial_state() -> Board {
    Board::new()
}

/// Player who has the next turn on `board`.
pub fn player(board: &Board) -> Player {
    board.player()
}

/// All moves available on `board`, in row-major order.
pub fn actions(board: &Board) -> BTreeSet<Move> {
    board.actions()
}

/// Board that results from playing `mv`; `board` itself is left untouched.
pub fn result(board: &Board, mv: Move) -> crate::Result<Board> {
    board.result(mv)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

pub fn utility(board: &Board) -> i32 {
    board.utility()
}

/// Optimal move for the current player, `None` if the game is over.
///
/// Builds a fresh [`Solver`]; keep one around to share its cache across calls.
pub fn minimax(board: &Board) -> Option<Move> {
    Solver::new().best_move(board)
}

/// Game-theoretic value of `board` under optimal play.
pub fn value(board: &Board) -> i32 {
    Solver::new().value(board)
}
