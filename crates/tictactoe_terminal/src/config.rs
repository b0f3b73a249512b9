//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_board::{DEFAULT_SIZE, MAX_SIZE};
use tracing::{debug, info, instrument};

/// Who places the first mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The person at the keyboard moves first.
    #[default]
    Human,
    /// The heuristic opponent moves first.
    Computer,
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Board side length.
    size: usize,

    /// Who moves first.
    first_player: FirstPlayer,

    /// Pause between turns in milliseconds (0 disables pacing).
    turn_delay_ms: u64,

    /// Seed for the opponent's tie-breaking shuffle.
    #[setters(strip_option)]
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Print the numbered guide grid before each human prompt.
    show_numbers: bool,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[setters(into)]
    log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            first_player: FirstPlayer::default(),
            turn_delay_ms: 1000,
            seed: None,
            show_numbers: true,
            log_level: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(size = config.size, first_player = %config.first_player, "Config loaded");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::new("Board size must be at least 1".to_string()));
        }
        if self.size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be at most {}, got {}",
                MAX_SIZE, self.size
            )));
        }
        Ok(())
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
