//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::BOARD_SIZE};

/// Winning lines as (row, col) triples, checked in this order.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)], // main diagonal
    [(0, 2), (1, 1), (2, 0)], // anti-diagonal
];

type Cells = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &Cells, player: Player) -> bool {
        Self::completed_lines(cells, player).next().is_some()
    }

    /// The mark filling the first complete line, if any.
    ///
    /// A board where both marks own a line cannot arise from legal play; the
    /// first line found in [`WINNING_LINES`] order decides it.
    pub fn winner(cells: &Cells) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let [(r, c), rest @ ..] = line;
            let player = cells[*r][*c].to_player()?;
            rest.iter()
                .all(|&(r, c)| cells[r][c] == player.to_cell())
                .then_some(player)
        })
    }

    /// Lines entirely owned by `player`
    pub fn completed_lines(
        cells: &Cells,
        player: Player,
    ) -> impl Iterator<Item = &'static [(usize, usize); 3]> + '_ {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(move |line| line.iter().all(|&(r, c)| cells[r][c] == target))
    }
}
