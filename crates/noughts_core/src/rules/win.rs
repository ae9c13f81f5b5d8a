//! Win detection logic for tic-tac-toe.

use super::draw::is_full;
use crate::types::{Board, Cell, GameResult, Player};

/// The eight winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`LINES`] order,
/// `None` otherwise. Lines are reported from board contents alone; a board
/// where both players hold a line is not rejected.
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => Some(player),
        _ => None,
    })
}

/// Evaluates a board: a completed line wins, a full board draws, anything
/// else is still in progress.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
