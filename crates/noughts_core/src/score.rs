//! Running score across the games of one mode.

use crate::types::{GameResult, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Win and draw counters for a session.
///
/// Counters only grow while the mode stays the same; a mode change zeroes
/// them through [`ScoreBoard::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreBoard {
    /// Creates an all-zero score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress results are ignored.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Player::X) => self.x_wins += 1,
            GameResult::Win(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}
