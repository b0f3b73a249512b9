//! Tests for loading configuration files.

use std::io::Write;
use tictactoe_terminal::{FirstPlayer, GameConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(
        file,
        "size = 5\nfirst_player = \"computer\"\nturn_delay_ms = 0\nseed = 17\nshow_numbers = false"
    )
    .expect("Write config");

    let config = GameConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.size(), 5);
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(*config.turn_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(17));
    assert!(!*config.show_numbers());
    assert_eq!(config.log_level(), "warn");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_zero_size_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "size = 0").expect("Write config");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_load_without_path_gives_defaults() {
    assert_eq!(GameConfig::load(None).expect("Defaults"), GameConfig::default());
}

#[test]
fn test_round_trip_through_toml() {
    let config = GameConfig::default().with_size(4).with_seed(2);
    let text = toml::to_string_pretty(&config).expect("Serializable");
    let parsed: GameConfig = toml::from_str(&text).expect("Parsable");
    assert_eq!(parsed, config);
}

#[test]
fn test_oversized_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "size = 8589934592").expect("Write config");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("at most"));
}
