//! Terminal UI for Strictly Hanoi.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::settings::GameSettings;

pub use controller::GameController;
pub use input::{GameInput, game_input, rod_at, rod_for_key};
pub use screen::{Screen, ScreenTransition};
pub use screens::{DifficultySelectScreen, InGameScreen, NameEntryScreen, ResultScreen};
pub use ui::{GameView, center_rect, draw_game, tower_areas};

/// Sends tracing output to `log_file` so it never draws over the TUI.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the TUI until the player quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: &GameSettings) -> Result<()> {
    info!("Starting Strictly Hanoi TUI");

    let num_disks = settings.disk_count().context("Invalid disk count")?;
    let mut controller = GameController::new(settings.player_name().clone(), num_disks);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = controller.run(&mut terminal);

    // Restore the terminal even if the game loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Game loop failed");
    }
    info!("TUI exited");
    result
}
