//! Noughts core - tic-tac-toe rules, session state and computer opponents
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a [`Board`]
//! - **AI**: move selection at three [`Tier`]s; the hard tier is an
//!   exhaustive [`Minimax`] search that never loses
//! - **Game**: the [`GameState`] session, which validates moves, alternates
//!   turns and openers, keeps score and triggers computer replies
//!
//! Everything is synchronous and single-threaded. A command returns only
//! after any computer reply it triggers has been applied.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameResult, GameState, Mode, Player};
//!
//! let mut game = GameState::with_seed(7);
//! game.set_mode(Mode::AiHard);
//!
//! // The human plays X; the computer answers as O in the same call.
//! let update = game.make_move(4, Player::X).unwrap();
//! assert_eq!(update.status().result, GameResult::InProgress);
//! assert_eq!(update.status().turn, Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod mode;
mod position;
pub mod rules;
mod score;
mod types;

// Crate-level exports - Board and outcome types
pub use types::{Board, BoardParseError, Cell, GameResult, GameStatus, Player, SQUARE_COUNT};

// Crate-level exports - Moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - Modes and scoring
pub use mode::{COMPUTER, HUMAN, Mode, ModeError, Tier};
pub use score::ScoreBoard;

// Crate-level exports - Computer opponent
pub use ai::{Minimax, ScoredMove, StrategyError, choose_move, find_two_in_row, minimax};

// Crate-level exports - Session
pub use game::{GameState, ModeUpdate, Snapshot, Update};

// Crate-level exports - Rules
pub use rules::evaluate;
