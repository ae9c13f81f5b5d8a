//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (the human in computer modes).
    X,
    /// Player O (the computer in computer modes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a small `Copy` value, so search code can hand each
/// hypothetical position its own board instead of undoing placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SQUARE_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SQUARE_COUNT],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; SQUARE_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are not.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; SQUARE_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// Out-of-range indices leave the copy unchanged.
    pub fn with(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Cell::Occupied(player);
        }
        next
    }

    /// Places a mark in place. Callers validate legality first.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Occupied(player);
        }
    }

    /// Row-major text form: `X`, `O` and `_` for empty.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|c| match c {
                Cell::Empty => '_',
                Cell::Occupied(Player::X) => 'X',
                Cell::Occupied(Player::O) => 'O',
            })
            .collect()
    }

    /// Formats the board as a grid, numbering empty squares 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// Text did not contain exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// Character is not a mark or an empty marker.
    #[display("Unrecognised square {:?}", _0)]
    BadSquare(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine row-major squares; whitespace and `|` separators are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if squares.len() != SQUARE_COUNT {
            return Err(BoardParseError::WrongLength(squares.len()));
        }

        let mut cells = [Cell::Empty; SQUARE_COUNT];
        for (cell, ch) in cells.iter_mut().zip(squares) {
            *cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '_' | '.' | '-' => Cell::Empty,
                other => return Err(BoardParseError::BadSquare(other)),
            };
        }
        Ok(Self { cells })
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameResult {
    /// Returns true once the game is won or drawn.
    pub fn is_complete(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Display-agnostic summary of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Current result.
    pub result: GameResult,
    /// Player due to move. Only meaningful while in progress.
    pub turn: Player,
}

impl GameStatus {
    /// Creates a status.
    pub fn new(result: GameResult, turn: Player) -> Self {
        Self { result, turn }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.result {
            GameResult::InProgress => write!(f, "Next player {}", self.turn),
            GameResult::Win(player) => write!(f, "Winner: {}", player),
            GameResult::Draw => write!(f, "Draw game"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_compact_form() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(board.get(0), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(4), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.to_compact(), "XX_OO____");
    }

    #[test]
    fn test_parse_ignores_grid_separators() {
        let board: Board = "X|O|_\n_|X|_\n_|_|O".parse().unwrap();
        assert_eq!(board.to_compact(), "XO__X___O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XXZ______".parse::<Board>(),
            Err(BoardParseError::BadSquare('Z'))
        );
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(4, Player::O);
        assert!(board.is_blank());
        assert_eq!(next.get(4), Some(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board: Board = "X___O___X".parse().unwrap();
        let empty: Vec<usize> = board.empty_indices().collect();
        assert_eq!(empty, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            GameStatus::new(GameResult::InProgress, Player::O).to_string(),
            "Next player O"
        );
        assert_eq!(
            GameStatus::new(GameResult::Win(Player::X), Player::O).to_string(),
            "Winner: X"
        );
        assert_eq!(
            GameStatus::new(GameResult::Draw, Player::X).to_string(),
            "Draw game"
        );
    }
}
