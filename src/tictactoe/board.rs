//! Board representation and basic operations

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move addressing one cell as (row, col)
///
/// Ordering is row-major, which is also the order [`Board::actions`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move, validating it lies on the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if row or column is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Move { row, col })
        } else {
            Err(crate::Error::OutOfBounds { row, col })
        }
    }

    /// Row-major index in 0..9
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Inverse of [`Move::index`].
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells.
///
/// The player to move is not stored; it is derived from the piece counts
/// (X always opens). `Board` is `Copy` and every operation that "changes" it
/// returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
    pub(crate) empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from raw rows without checking the piece-count invariant.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// Nine cell characters are read in row-major order; whitespace and the
    /// row separators `|` and `/` are ignored. `.`, `_` and a space are empty
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 cell characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts break the X-opens alternation
    ///
    /// # Examples
    ///
    /// ```
    /// use minimax_pagerank::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("XX.|OO.|...").unwrap();
    /// assert_eq!(board.player(), Player::X);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let stripped: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r' | '\t'))
            .collect();
        let dense: Vec<char> = stripped.iter().copied().filter(|&c| c != ' ').collect();
        // Spaces only count as empty cells when the board would otherwise be short.
        let chars = if dense.len() >= 9 { dense } else { stripped };
        let board = Board {
            cells: Self::parse_cells(&chars, s)?,
        };
        board.validate()?;
        Ok(board)
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(
        chars: &[char],
        context: &str,
    ) -> Result<[[Cell; BOARD_SIZE]; BOARD_SIZE], crate::Error> {
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: context.to_string(),
                })?;
        }

        Ok(cells)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Rows of the board
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Get the cell addressed by a move
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Player who has the next turn.
    ///
    /// X when the counts are equal, O otherwise. Boards that break the
    /// alternation invariant are not rejected here and simply yield O; use
    /// [`Board::validate`] to detect them.
    pub fn player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells, in row-major order.
    pub fn actions(&self) -> BTreeSet<Move> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Move { row, col }))
            .filter(|&mv| self.get(mv) == Cell::Empty)
            .collect()
    }

    /// Every legal move paired with the board it produces, in row-major order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        let mark = self.player().to_cell();
        self.actions().into_iter().map(move |mv| {
            let mut next = *self;
            next.cells[mv.row][mv.col] = mark;
            (mv, next)
        })
    }

    /// Board after the current player marks `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] for a move off the board and
    /// [`crate::Error::InvalidMove`] if the cell is already occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, mv: Move) -> Result<Board, crate::Error> {
        if mv.row >= BOARD_SIZE || mv.col >= BOARD_SIZE {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }

        if self.get(mv) != Cell::Empty {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = self.player().to_cell();
        Ok(next)
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.count_pieces().empty == 0
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// A non-terminal board also scores 0; check [`Board::is_terminal`] to
    /// tell a draw from an unfinished game.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Nine-character row-major encoding, e.g. `"XX.OO...."`.
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
