//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{Game, PlayerRegistry, Rules};
use tracing::{debug, info, instrument};

/// Board and player settings for new games.
///
/// ```toml
/// rows = 3
/// columns = 3
/// run_length = 3
/// player_x = "Alice"
/// player_o = "Bob"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of board rows.
    #[serde(default = "default_side")]
    rows: usize,

    /// Number of board columns.
    #[serde(default = "default_side")]
    columns: usize,

    /// Symbols in a row needed to win.
    #[serde(default = "default_run_length")]
    run_length: usize,

    /// Display name for X.
    #[serde(default)]
    player_x: Option<String>,

    /// Display name for O.
    #[serde(default)]
    player_o: Option<String>,
}

#[instrument]
fn default_side() -> usize {
    3
}

#[instrument]
fn default_run_length() -> usize {
    3
}

impl GameConfig {
    /// Classic 3x3 configuration with default names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rows: default_side(),
            columns: default_side(),
            run_length: default_run_length(),
            player_x: None,
            player_o: None,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            rows = config.rows,
            columns = config.columns,
            run_length = config.run_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces board settings that were given explicitly.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        rows: Option<usize>,
        columns: Option<usize>,
        run_length: Option<usize>,
    ) -> Self {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(columns) = columns {
            self.columns = columns;
        }
        if let Some(run_length) = run_length {
            self.run_length = run_length;
        }
        self
    }

    /// Builds validated rules.
    #[instrument(skip(self))]
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Rules::n_in_a_row(self.rows, self.columns, self.run_length)
            .map_err(|e| ConfigError::new(format!("Invalid board: {}", e)))
    }

    /// Player names, falling back to defaults for missing entries.
    pub fn players(&self) -> PlayerRegistry {
        PlayerRegistry::with_names(
            self.player_x.as_deref().unwrap_or_default(),
            self.player_o.as_deref().unwrap_or_default(),
        )
    }

    /// Starts a new game with these settings.
    #[instrument(skip(self))]
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        Ok(Game::with_players(self.rules()?, self.players()))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Symbol;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GameConfig = toml::from_str("player_o = \"Bob\"").unwrap();
        assert_eq!(*config.rows(), 3);
        assert_eq!(*config.run_length(), 3);
        assert_eq!(config.players().name(Symbol::O), "Bob");
        assert_eq!(config.players().name(Symbol::X), "Player 1");
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::new().with_overrides(Some(5), None, Some(4));
        assert_eq!(*config.rows(), 5);
        assert_eq!(*config.columns(), 3);
        assert_eq!(*config.run_length(), 4);
        assert!(config.rules().is_ok());
    }

    #[test]
    fn test_invalid_board_rejected() {
        let config = GameConfig::new().with_overrides(Some(0), None, None);
        let err = config.rules().unwrap_err();
        assert!(err.message.contains("Invalid board"));

        let config = GameConfig::new().with_overrides(None, None, Some(7));
        assert!(config.new_game().is_err());
    }
}
