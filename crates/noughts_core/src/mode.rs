//! Game modes and computer difficulty tiers.
//!
//! Modes carry the numeric codes used by menus (1-4) and kebab-case names
//! used by configuration files. Role assignment is fixed: in every computer
//! mode the human plays [`HUMAN`] and the computer plays [`COMPUTER`].

use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// The human's mark in computer modes.
pub const HUMAN: Player = Player::X;

/// The computer's mark in computer modes.
pub const COMPUTER: Player = Player::O;

/// How the two sides of a game are controlled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// Human against the easy computer.
    AiEasy,
    /// Human against the medium computer.
    AiMedium,
    /// Human against the minimax computer.
    AiHard,
}

/// Computer difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tier {
    /// Takes an immediate win, otherwise plays randomly.
    Easy,
    /// Takes a win, blocks a loss, otherwise opens corner/center or plays randomly.
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

/// Error resolving a mode.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ModeError {
    /// Mode code or name is not recognised.
    #[display("Unknown mode {:?}", _0)]
    UnknownMode(String),
}

impl std::error::Error for ModeError {}

impl Mode {
    /// Menu code of this mode (1-4).
    pub fn code(self) -> u8 {
        match self {
            Mode::PlayerVsPlayer => 1,
            Mode::AiEasy => 2,
            Mode::AiMedium => 3,
            Mode::AiHard => 4,
        }
    }

    /// The computer tier this mode plays at, if the computer plays at all.
    pub fn tier(self) -> Option<Tier> {
        match self {
            Mode::PlayerVsPlayer => None,
            Mode::AiEasy => Some(Tier::Easy),
            Mode::AiMedium => Some(Tier::Medium),
            Mode::AiHard => Some(Tier::Hard),
        }
    }

    /// Returns true if the computer controls [`COMPUTER`] in this mode.
    pub fn has_computer(self) -> bool {
        self.tier().is_some()
    }

    /// Parses a menu code (`"3"`) or a name (`"ai-medium"`).
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, ModeError> {
        let s = s.trim();
        let parsed = match s.parse::<u8>() {
            Ok(code) => Mode::try_from(code),
            Err(_) => s
                .parse::<Mode>()
                .map_err(|_| ModeError::UnknownMode(s.to_string())),
        };
        if let Err(e) = &parsed {
            warn!(input = s, error = %e, "Rejected mode");
        }
        parsed
    }
}

impl TryFrom<u8> for Mode {
    type Error = ModeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Mode::PlayerVsPlayer),
            2 => Ok(Mode::AiEasy),
            3 => Ok(Mode::AiMedium),
            4 => Ok(Mode::AiHard),
            other => Err(ModeError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip() {
        for mode in Mode::iter() {
            assert_eq!(Mode::try_from(mode.code()), Ok(mode));
        }
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(Mode::parse("ai-hard"), Ok(Mode::AiHard));
        assert_eq!(Mode::parse("AI-Easy"), Ok(Mode::AiEasy));
        assert_eq!(Mode::parse(" 3 "), Ok(Mode::AiMedium));
        assert_eq!(Mode::parse("player-vs-player"), Ok(Mode::PlayerVsPlayer));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            Mode::parse("5"),
            Err(ModeError::UnknownMode("5".to_string()))
        );
        assert!(Mode::parse("nightmare").is_err());
    }

    #[test]
    fn test_display_matches_config_name() {
        assert_eq!(Mode::AiMedium.to_string(), "ai-medium");
    }

    #[test]
    fn test_only_pvp_lacks_tier() {
        assert_eq!(Mode::PlayerVsPlayer.tier(), None);
        assert_eq!(Mode::AiHard.tier(), Some(Tier::Hard));
    }
}
