//! Tests for session configuration loading.

use noughts::SessionConfig;
use noughts::noughts_core::{Mode, Player};
use std::io::Write;

#[test]
fn test_full_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"ai-medium\"\nseed = 42\nlog_filter = \"debug\"").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), Mode::AiMedium);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_fields_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 7").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), Mode::PlayerVsPlayer);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"ai-impossible\"").unwrap();

    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides_and_session_start() {
    let config = SessionConfig::default().with_overrides(Some(Mode::AiHard), Some(3));
    assert_eq!(*config.seed(), Some(3));

    let game = config.start_session();
    assert_eq!(game.mode(), Mode::AiHard);
    assert_eq!(game.to_move(), Player::X);
    assert!(game.board().is_blank());
}

#[test]
fn test_overrides_keep_unset_values() {
    let config = SessionConfig::default()
        .with_overrides(None, Some(9))
        .with_overrides(None, None);
    assert_eq!(*config.mode(), Mode::PlayerVsPlayer);
    assert_eq!(*config.seed(), Some(9));
}
