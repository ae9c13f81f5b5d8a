//! Exhaustive minimax search for the hard tier.
//!
//! The whole remaining game tree is searched; on a 3x3 board that is at most
//! 9! leaves, so there is no depth limit, pruning or transposition table.
//!
//! Scores are from the computer's point of view: [`WIN_SCORE`] when it holds a
//! line, [`LOSS_SCORE`] when its opponent does, [`DRAW_SCORE`] for a full
//! board. Scores are not discounted by depth, so among equally valued moves
//! the lowest index is chosen rather than the fastest win.

use crate::rules;
use crate::types::{Board, GameResult, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal score when the searching player has won.
pub const WIN_SCORE: i32 = 10;

/// Terminal score when the searching player has lost.
pub const LOSS_SCORE: i32 = -10;

/// Terminal score for a draw.
pub const DRAW_SCORE: i32 = 0;

/// A candidate move with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Board index to play.
    pub index: usize,
    /// Value of the position after playing `index`, with optimal play after.
    pub score: i32,
}

/// Minimax searcher maximising for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    ai: Player,
}

impl Minimax {
    /// Creates a searcher that plays for `ai`; the other player minimises.
    pub fn new(ai: Player) -> Self {
        Self { ai }
    }

    /// The player this searcher maximises for.
    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Best move for `mover` on `board`.
    ///
    /// When `mover` is the searcher's player the first move with the highest
    /// score wins; otherwise the first move with the lowest score. Returns
    /// `None` if the board is already won or full.
    #[instrument(level = "debug", skip(self, board), fields(ai = %self.ai, board = %board.to_compact()))]
    pub fn search(&self, board: &Board, mover: Player) -> Option<ScoredMove> {
        if self.terminal_score(board).is_some() {
            debug!("Board is terminal, nothing to search");
            return None;
        }
        let best = self.best_reply(board, mover);
        debug!(?best, "Search complete");
        best
    }

    /// Index the searcher's player should play on `board`.
    pub fn best_move(&self, board: &Board) -> Option<usize> {
        self.search(board, self.ai).map(|m| m.index)
    }

    fn terminal_score(&self, board: &Board) -> Option<i32> {
        match rules::evaluate(board) {
            GameResult::Win(winner) if winner == self.ai => Some(WIN_SCORE),
            GameResult::Win(_) => Some(LOSS_SCORE),
            GameResult::Draw => Some(DRAW_SCORE),
            GameResult::InProgress => None,
        }
    }

    fn value(&self, board: &Board, mover: Player) -> i32 {
        match self.terminal_score(board) {
            Some(score) => score,
            None => self
                .best_reply(board, mover)
                .map_or(DRAW_SCORE, |best| best.score),
        }
    }

    fn best_reply(&self, board: &Board, mover: Player) -> Option<ScoredMove> {
        let maximizing = mover == self.ai;
        let mut best: Option<ScoredMove> = None;

        for index in board.empty_indices() {
            let child = board.with(index, mover);
            let candidate = ScoredMove {
                index,
                score: self.value(&child, mover.opponent()),
            };
            // Strict comparison keeps the first of equal scores.
            let improves = match best {
                None => true,
                Some(current) if maximizing => candidate.score > current.score,
                Some(current) => candidate.score < current.score,
            };
            if improves {
                best = Some(candidate);
            }
        }

        best
    }
}

/// Best move for `ai` on `board`, searching the whole remaining tree.
pub fn minimax(board: &Board, ai: Player) -> Option<ScoredMove> {
    Minimax::new(ai).search(board, ai)
}
