//! Board layout and competition configuration.
//!
//! The number of rows and the length of each row are configuration, not
//! game rules. The classic layout is a pyramid of five rows holding
//! 1, 3, 5, 7 and 9 sticks.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Rows in the default pyramid layout.
pub const DEFAULT_ROW_COUNT: usize = 5;

/// Board layout, loadable from TOML.
///
/// ```
/// use misere_nim::core::BoardConfig;
///
/// let config: BoardConfig = toml::from_str("rows = [2, 2]").unwrap();
/// assert_eq!(config.rows, vec![2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Stick count of each row, top to bottom.
    pub rows: Vec<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::pyramid(DEFAULT_ROW_COUNT)
    }
}

impl BoardConfig {
    /// Pyramid layout: row `i` (1-based) holds `2i - 1` sticks.
    #[must_use]
    pub fn pyramid(row_count: usize) -> Self {
        Self {
            rows: (1..=row_count).map(|i| 2 * i - 1).collect(),
        }
    }

    /// Explicit row lengths.
    #[must_use]
    pub fn with_rows(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Total sticks on a fresh board.
    #[must_use]
    pub fn total_sticks(&self) -> usize {
        self.rows.iter().sum()
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: BoardConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "board config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows.is_empty() {
            return Err(ConfigError::Validation("rows must not be empty".into()));
        }
        if let Some(pos) = self.rows.iter().position(|&len| len == 0) {
            return Err(ConfigError::Validation(format!(
                "row {} must hold at least one stick",
                pos + 1
            )));
        }
        Ok(())
    }

    /// Render the default layout as TOML.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Self::default())
    }
}

/// Competition parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionConfig {
    /// Layout used for every round.
    pub board: BoardConfig,

    /// Number of rounds to play.
    pub rounds: u32,

    /// Whether to print the play-by-play transcript.
    pub display_messages: bool,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            rounds: 1,
            display_messages: false,
        }
    }
}

impl CompetitionConfig {
    /// Create a new competition config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board layout.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Enable or disable the transcript.
    #[must_use]
    pub fn with_display_messages(mut self, display: bool) -> Self {
        self.display_messages = display;
        self
    }
}
