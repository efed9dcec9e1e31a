//! Board state validation logic

use std::collections::HashSet;

use super::{Player, board::Board, lines::LineAnalyzer};

impl Board {
    /// Check the alternation invariant: X count minus O count is 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] for any other imbalance.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o || count.x == count.o + 1 {
            Ok(())
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Check if the board could arise from legal play starting on an empty board
    pub fn is_valid(&self) -> bool {
        if self.validate().is_err() {
            return false;
        }

        let count = self.count_pieces();
        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // The winner must have moved last.
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Multiple winning lines must share the cell that completed them.
        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return false;
            }
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines: Vec<_> = LineAnalyzer::completed_lines(self.cells(), player).collect();
        if lines.len() < 2 {
            return true;
        }

        lines[0]
            .iter()
            .any(|cell| lines.iter().all(|line| line.contains(cell)))
    }

    /// Count distinct boards reachable from the empty board
    pub fn count_reachable_states() -> usize {
        let mut stack = vec![Board::new()];
        let mut seen = HashSet::new();

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }

            if !state.is_terminal() {
                stack.extend(state.successors().map(|(_, next)| next));
            }
        }

        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_double_line_requires_shared_cell() {
        // XXX
        // XOO
        // XOO
        let board = Board::from_string("XXX|XOO|XOO").unwrap();
        assert!(board.is_valid());
    }

    #[test]
    fn test_parallel_lines_do_not_share_a_cell() {
        // XXX
        // OO.
        // XXX
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0] = [Cell::X; 3];
        cells[1] = [Cell::O, Cell::O, Cell::Empty];
        cells[2] = [Cell::X; 3];
        let board = Board::from_cells(cells);

        assert!(!board.winning_lines_share_cell(Player::X));
        assert!(board.winning_lines_share_cell(Player::O));
        assert!(!board.is_valid());
    }

    #[test]
    fn test_crossing_lines_share_a_cell() {
        let board = Board::from_string("XXX|XOO|XOO").unwrap();
        assert!(board.winning_lines_share_cell(Player::X));
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // X wins but O has as many pieces: O moved after the game ended.
        let board = Board::from_string("XXX|OO.|O..").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_both_players_winning_is_invalid() {
        let board = Board::from_cells([
            [Cell::X, Cell::X, Cell::X],
            [Cell::O, Cell::O, Cell::O],
            [Cell::Empty; 3],
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn test_reachable_state_count() {
        // Classic count of positions reachable in legal play.
        assert_eq!(Board::count_reachable_states(), 5478);
    }
}
