//! Strictly Hanoi - Tower of Hanoi in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_hanoi::{Cli, GameSettings, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let settings = GameSettings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    let settings = cli.apply(settings);
    info!(?settings, "Resolved settings");

    run_tui(&settings)
}
