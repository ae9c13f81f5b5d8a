//! First-class move types for tic-tac-toe.
//!
//! Moves are domain values, not side effects: they are validated against a
//! game before application and kept in the game's history afterwards.

use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a board index (0-8).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{} -> {}", player, index)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index of the placed mark.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn, {} is to move", attempted, expected)]
    WrongPlayer {
        /// Player who tried to move.
        attempted: Player,
        /// Player due to move.
        expected: Player,
    },
}

impl std::error::Error for MoveError {}
