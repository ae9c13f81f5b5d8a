//! Scripted play: apply a list of squares and report the outcome.

use noughts_core::{GameState, HUMAN, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A square that was not applied, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The square as given.
    pub square: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Final state of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Session state after the last square.
    pub snapshot: Snapshot,
    /// Board in compact row-major form.
    pub board: String,
    /// Status line as a front end would show it.
    pub status: String,
    /// Squares that were skipped.
    pub rejected: Vec<Rejection>,
}

/// Plays `squares` in order for whoever is due (the human in computer
/// modes). Rejected squares are recorded and skipped, like an ignored click.
#[instrument(skip(game), fields(mode = %game.mode()))]
pub fn replay(game: &mut GameState, squares: &[String]) -> ReplayReport {
    let mut rejected = Vec::new();

    for square in squares {
        let reason = match Position::from_label_or_number(square) {
            None => Some(format!("Unrecognised square {:?}", square)),
            Some(pos) => {
                let player = if game.mode().has_computer() {
                    HUMAN
                } else {
                    game.to_move()
                };
                game.make_move(pos.to_index(), player)
                    .err()
                    .map(|e| e.to_string())
            }
        };
        if let Some(reason) = reason {
            warn!(square = %square, reason = %reason, "Skipping square");
            rejected.push(Rejection {
                square: square.clone(),
                reason,
            });
        }
    }

    let snapshot = game.snapshot();
    ReplayReport {
        board: snapshot.board().to_compact(),
        status: snapshot.status().to_string(),
        snapshot,
        rejected,
    }
}
