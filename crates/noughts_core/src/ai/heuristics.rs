//! One-move lookahead heuristics for the easy and medium tiers.

use crate::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// For each index, the pairs of squares that complete a line through it.
const COMPLETIONS: [&[[usize; 2]]; 9] = [
    &[[1, 2], [3, 6], [4, 8]],
    &[[0, 2], [4, 7]],
    &[[0, 1], [4, 6], [5, 8]],
    &[[0, 6], [4, 5]],
    &[[0, 8], [2, 6], [1, 7], [3, 5]],
    &[[3, 4], [2, 8]],
    &[[0, 3], [2, 4], [7, 8]],
    &[[1, 4], [6, 8]],
    &[[0, 4], [6, 7], [2, 5]],
];

/// Opening squares the medium tier picks from on a blank board.
const OPENINGS: [usize; 2] = [0, 4];

/// Finds the lowest empty index where `player` already holds both other
/// squares of a line.
///
/// Playing there wins for `player`; for the opponent it is the block.
pub fn find_two_in_row(board: &Board, player: Player) -> Option<usize> {
    let cells = board.cells();
    board.empty_indices().find(|&index| {
        COMPLETIONS[index].iter().any(|&[a, b]| {
            cells[a].player() == Some(player) && cells[b].player() == Some(player)
        })
    })
}

/// Any empty index, uniformly.
pub fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_indices().collect();
    empty.choose(rng).copied()
}

/// Easy tier: win if possible, otherwise random.
pub fn easy_move<R: Rng + ?Sized>(board: &Board, ai: Player, rng: &mut R) -> Option<usize> {
    if let Some(index) = find_two_in_row(board, ai) {
        debug!(index, "Taking winning square");
        return Some(index);
    }
    random_empty(board, rng)
}

/// Medium tier: win, else block, else corner/center opening, else random.
pub fn medium_move<R: Rng + ?Sized>(board: &Board, ai: Player, rng: &mut R) -> Option<usize> {
    if let Some(index) = find_two_in_row(board, ai) {
        debug!(index, "Taking winning square");
        return Some(index);
    }
    if let Some(index) = find_two_in_row(board, ai.opponent()) {
        debug!(index, "Blocking opponent");
        return Some(index);
    }
    if board.is_blank() {
        return OPENINGS.choose(rng).copied();
    }
    random_empty(board, rng)
}
