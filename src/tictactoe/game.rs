//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Move, Player},
    minimax::Solver,
};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub mv: Move,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is running
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub turns: Vec<Turn>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continue a game from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            turns: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move for whoever is to move
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.result(mv)?;

        self.turns.push(Turn {
            mv,
            player: current.player(),
        });
        self.outcome = GameOutcome::of(&next);

        Ok(())
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was played on. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.turns
            .iter()
            .try_fold(self.initial, |board, turn| board.result(turn.mv))
    }

    /// Get the sequence of board states, starting with the initial one
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.turns.len() + 1);
        let mut board = self.initial;
        states.push(board);
        for turn in &self.turns {
            board = board.result(turn.mv)?;
            states.push(board);
        }
        Ok(states)
    }

    /// Play the solver against itself until the game ends.
    pub fn self_play(solver: &mut Solver) -> Result<Self, crate::Error> {
        Self::self_play_from(Board::new(), solver)
    }

    /// Like [`Game::self_play`], starting from `board`.
    pub fn self_play_from(board: Board, solver: &mut Solver) -> Result<Self, crate::Error> {
        let mut game = Self::from_board(board);
        while game.outcome.is_none() {
            let current = game.current_state()?;
            let Some(mv) = solver.best_move(&current) else {
                break;
            };
            game.play(mv)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_play_records_players() {
        let mut game = Game::new();
        game.play(mv(0, 0)).unwrap();
        game.play(mv(1, 1)).unwrap();

        assert_eq!(game.turns[0].player, Player::X);
        assert_eq!(game.turns[1].player, Player::O);
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(mv(0, 0)).unwrap();
        let err = game.play(mv(0, 0)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { row: 0, col: 0 }));
        assert_eq!(game.turns.len(), 1);
    }

    #[test]
    fn test_play_after_win_fails() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(mv(row, col)).unwrap();
        }
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(game.play(mv(2, 2)), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_state_sequence() {
        let mut game = Game::new();
        game.play(mv(1, 1)).unwrap();
        game.play(mv(0, 0)).unwrap();

        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], Board::new());
        assert_eq!(states[2], game.current_state().unwrap());
    }

    #[test]
    fn test_self_play_draws() {
        let mut solver = Solver::new();
        let game = Game::self_play(&mut solver).unwrap();
        let last = game.current_state().unwrap();

        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert!(last.is_terminal());
        assert_eq!(last.utility(), 0);
        assert_eq!(game.turns.len(), 9);
    }

    #[test]
    fn test_self_play_from_terminal_board() {
        let board = Board::from_string("XXX|OO.|...").unwrap();
        let mut solver = Solver::new();
        let game = Game::self_play_from(board, &mut solver).unwrap();
        assert!(game.turns.is_empty());
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }
}
