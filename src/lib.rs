//! Noughts - tic-tac-toe in the terminal
//!
//! Front-end pieces around [`noughts_core`]:
//!
//! - **Config**: TOML session settings (starting mode, RNG seed, log filter)
//! - **Console**: interactive line-oriented play over any reader/writer
//! - **Replay**: apply scripted squares and report the final snapshot
//!
//! # Example
//!
//! ```
//! use noughts::{SessionConfig, replay};
//!
//! let mut game = SessionConfig::default().start_session();
//! let squares: Vec<String> = ["1", "4", "2", "5", "3"].map(String::from).to_vec();
//! let report = replay(&mut game, &squares);
//! assert_eq!(report.status, "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod replay;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Front ends
pub use console::{Console, Input};
pub use replay::{Rejection, ReplayReport, replay};

// Crate-level exports - Core engine
pub use noughts_core;
