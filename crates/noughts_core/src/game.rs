//! Turn-based game state machine.
//!
//! [`GameState`] owns the board, turn order, mode and score for a session.
//! Every command runs to completion before returning, including a computer
//! reply when the mode calls for one, so callers only ever see settled state.

use crate::action::{Move, MoveError};
use crate::ai;
use crate::mode::{COMPUTER, HUMAN, Mode};
use crate::rules;
use crate::score::ScoreBoard;
use crate::types::{Board, GameResult, GameStatus, Player, SQUARE_COUNT};
use derive_getters::Getters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Board and status after a move or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Update {
    /// Status after the command.
    status: GameStatus,
    /// Board after the command.
    board: Board,
}

/// Board, status and score after a mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ModeUpdate {
    /// Status of the fresh game.
    status: GameStatus,
    /// Board of the fresh game.
    board: Board,
    /// Score after the reset.
    scores: ScoreBoard,
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board.
    board: Board,
    /// Current status.
    status: GameStatus,
    /// Running score for this mode.
    scores: ScoreBoard,
    /// Current mode.
    mode: Mode,
}

/// A tic-tac-toe session: the current game plus mode and running score.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    mode: Mode,
    to_move: Player,
    opener: Player,
    result: GameResult,
    scores: ScoreBoard,
    history: Vec<Move>,
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates a player-vs-player session with X to open.
    ///
    /// The random tiers draw from OS entropy; use [`GameState::with_seed`]
    /// for reproducible play.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a session whose easy and medium tiers are reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            mode: Mode::default(),
            to_move: Player::X,
            opener: Player::X,
            result: GameResult::InProgress,
            scores: ScoreBoard::new(),
            history: Vec::new(),
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the player due to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who opened the current game.
    pub fn opener(&self) -> Player {
        self.opener
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the running score.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Moves accepted in the current game, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        GameStatus::new(self.result, self.to_move)
    }

    /// Returns everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            status: self.status(),
            scores: self.scores,
            mode: self.mode,
        }
    }

    fn update(&self) -> Update {
        Update {
            status: self.status(),
            board: self.board,
        }
    }

    /// Plays `player`'s mark at `index` (0-8).
    ///
    /// In computer modes a human move that leaves the game open is answered
    /// by the computer before this returns; the update reflects both moves.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the session untouched if the game
    /// is over, the index is out of range or occupied, or `player` is not due
    /// to move.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn make_move(&mut self, index: usize, player: Player) -> Result<Update, MoveError> {
        self.place(Move::new(player, index)).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;

        if self.mode.has_computer() && player == HUMAN && !self.result.is_complete() {
            self.play_computer_turn();
        }

        Ok(self.update())
    }

    /// Switches mode, zeroes the score and starts a fresh game.
    ///
    /// Entering a computer mode always lets the human open the first game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) -> ModeUpdate {
        info!(to = %mode, "Changing mode");
        self.mode = mode;
        self.scores.reset();
        if mode.has_computer() {
            // Restart flips the opener back to the human.
            self.opener = COMPUTER;
        }
        let update = self.restart();
        ModeUpdate {
            status: update.status,
            board: update.board,
            scores: self.scores,
        }
    }

    /// Starts the next game, keeping mode and score.
    ///
    /// The opener alternates with every restart. If the computer opens, it
    /// moves before this returns.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn restart(&mut self) -> Update {
        self.opener = self.opener.opponent();
        self.board = Board::new();
        self.history.clear();
        self.to_move = self.opener;
        self.result = GameResult::InProgress;
        info!(opener = %self.opener, "Starting new game");

        if self.mode.has_computer() && self.opener == COMPUTER {
            self.play_computer_turn();
        }

        self.update()
    }

    /// Validates and applies a single move, then re-derives the result.
    fn place(&mut self, mv: Move) -> Result<(), MoveError> {
        self.validate(mv)?;

        self.board.place(mv.index, mv.player);
        self.history.push(mv);
        self.to_move = mv.player.opponent();
        self.result = rules::evaluate(&self.board);
        debug!(%mv, result = ?self.result, "Move applied");

        if self.result.is_complete() {
            self.scores.record(self.result);
            info!(result = ?self.result, scores = ?self.scores, "Game over");
        }
        Ok(())
    }

    fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if self.result.is_complete() {
            return Err(MoveError::GameOver);
        }
        if mv.index >= SQUARE_COUNT {
            return Err(MoveError::OutOfBounds(mv.index));
        }
        if mv.player != self.to_move {
            return Err(MoveError::WrongPlayer {
                attempted: mv.player,
                expected: self.to_move,
            });
        }
        if !self.board.is_empty(mv.index) {
            return Err(MoveError::SquareOccupied(mv.index));
        }
        Ok(())
    }

    /// Asks the strategy for the computer's move and applies it.
    ///
    /// Failures are logged and the turn is skipped; the session is left as
    /// it was.
    fn play_computer_turn(&mut self) {
        let index = match ai::choose_move(&self.board, COMPUTER, self.mode, &mut self.rng) {
            Ok(index) => index,
            Err(e) => {
                error!(error = %e, mode = %self.mode, "Skipping computer move");
                return;
            }
        };
        if let Err(e) = self.place(Move::new(COMPUTER, index)) {
            error!(error = %e, index, "Computer chose an illegal move");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
