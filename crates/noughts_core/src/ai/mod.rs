//! Computer move selection.
//!
//! Each [`Tier`] dispatches to an independent pure function; all of them
//! read a board snapshot and return an index without keeping any state.

pub mod heuristics;
pub mod minimax;

pub use heuristics::{easy_move, find_two_in_row, medium_move, random_empty};
pub use minimax::{DRAW_SCORE, LOSS_SCORE, Minimax, ScoredMove, WIN_SCORE, minimax};

use crate::mode::{Mode, Tier};
use crate::rules;
use crate::types::{Board, Player};
use derive_more::Display;
use rand::Rng;
use tracing::{debug, instrument};

/// Why the computer could not pick a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StrategyError {
    /// The mode has no computer tier.
    #[display("Not a known AI mode: {}", _0)]
    UnknownMode(Mode),

    /// The board is already won or full.
    #[display("No moves available")]
    NoMovesAvailable,
}

impl std::error::Error for StrategyError {}

impl TryFrom<Mode> for Tier {
    type Error = StrategyError;

    fn try_from(mode: Mode) -> Result<Self, Self::Error> {
        mode.tier().ok_or(StrategyError::UnknownMode(mode))
    }
}

impl Tier {
    /// Picks a move for `ai` at this tier.
    ///
    /// Returns `None` only when the board has no legal move.
    pub fn choose_move<R: Rng + ?Sized>(self, board: &Board, ai: Player, rng: &mut R) -> Option<usize> {
        if rules::evaluate(board).is_complete() {
            return None;
        }
        match self {
            Tier::Easy => easy_move(board, ai, rng),
            Tier::Medium => medium_move(board, ai, rng),
            Tier::Hard => Minimax::new(ai).best_move(board),
        }
    }
}

/// Picks the computer's move for `ai` under `mode`.
#[instrument(skip(board, rng), fields(board = %board.to_compact()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    mode: Mode,
    rng: &mut R,
) -> Result<usize, StrategyError> {
    let tier = Tier::try_from(mode)?;
    let index = tier
        .choose_move(board, ai, rng)
        .ok_or(StrategyError::NoMovesAvailable)?;
    debug!(%tier, index, "Computer chose move");
    Ok(index)
}
