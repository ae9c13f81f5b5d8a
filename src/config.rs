//! Session configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{GameState, Mode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Mode the session starts in.
    #[serde(default)]
    mode: Mode,

    /// Seed for the random tiers. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the mode and seed with command-line overrides, when given.
    pub fn with_overrides(mut self, mode: Option<Mode>, seed: Option<u64>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Starts a session in the configured mode.
    ///
    /// Player-vs-player sessions start as created, with X to open; computer
    /// modes are entered through [`GameState::set_mode`].
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn start_session(&self) -> GameState {
        let mut game = match self.seed {
            Some(seed) => GameState::with_seed(seed),
            None => GameState::new(),
        };
        if self.mode != game.mode() {
            game.set_mode(self.mode);
        }
        game
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
