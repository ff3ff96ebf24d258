//! Game settings: player name, difficulty, and disk-count override.

use crate::games::hanoi::{DiskCount, DiskCountError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// Difficulty level, which fixes the number of disks.
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
    EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Three disks.
    #[default]
    Easy,
    /// Five disks.
    Medium,
    /// Seven disks.
    Hard,
}

impl Difficulty {
    /// Returns the number of disks for this level.
    pub fn disk_count(self) -> DiskCount {
        let count = match self {
            Difficulty::Easy => DiskCount::new(3),
            Difficulty::Medium => DiskCount::new(5),
            Difficulty::Hard => DiskCount::new(7),
        };
        // All three counts are inside 1..=MAX_DISKS.
        count.unwrap_or_else(|e| unreachable!("{}", e))
    }

    /// All levels in menu order.
    pub fn all() -> Vec<Difficulty> {
        Self::iter().collect()
    }
}

/// User-configurable settings, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Name shown on the game screen and in the victory message.
    #[serde(default)]
    player_name: Option<String>,

    /// Difficulty level.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Explicit disk count; takes precedence over `difficulty`.
    #[serde(default)]
    disks: Option<u8>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSettings {
    /// Creates empty settings: the player is asked for name and difficulty.
    #[instrument]
    pub fn new() -> Self {
        Self {
            player_name: None,
            difficulty: None,
            disks: None,
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from a file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::new())
        }
    }

    /// Parses settings from TOML text and validates the disk count.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;
        if let Some(disks) = settings.disks {
            DiskCount::new(disks)?;
        }
        Ok(settings)
    }

    /// Overrides the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Overrides the disk count.
    pub fn with_disks(mut self, disks: u8) -> Self {
        self.disks = Some(disks);
        self
    }

    /// Resolves the disk count, if enough is configured to skip the
    /// difficulty menu.
    #[instrument(skip(self))]
    pub fn disk_count(&self) -> Result<Option<DiskCount>, SettingsError> {
        match (self.disks, self.difficulty) {
            (Some(disks), _) => Ok(Some(DiskCount::new(disks)?)),
            (None, Some(difficulty)) => Ok(Some(difficulty.disk_count())),
            (None, None) => Ok(None),
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<DiskCountError> for SettingsError {
    #[track_caller]
    fn from(err: DiskCountError) -> Self {
        Self::new(format!("Invalid disk count: {}", err.count))
    }
}
