//! Command-line interface for strictly_hanoi.

use crate::settings::{Difficulty, GameSettings};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Strictly Hanoi - Tower of Hanoi in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Tower of Hanoi with a move budget and three lives", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if it doesn't exist)
    #[arg(short, long, default_value = "hanoi.toml")]
    pub config: PathBuf,

    /// Player name (skips the name prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Difficulty level: easy (3 disks), medium (5) or hard (7)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Number of disks, overriding the difficulty level
    #[arg(long)]
    pub disks: Option<u8>,

    /// File to write logs to
    #[arg(long, default_value = "strictly_hanoi.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Layers the command-line flags over settings loaded from file.
    #[instrument(skip(settings))]
    pub fn apply(&self, settings: GameSettings) -> GameSettings {
        let mut settings = settings;
        if let Some(name) = &self.name {
            settings = settings.with_player_name(name.clone());
        }
        if let Some(difficulty) = self.difficulty {
            settings = settings.with_difficulty(difficulty);
        }
        if let Some(disks) = self.disks {
            settings = settings.with_disks(disks);
        }
        settings
    }
}
