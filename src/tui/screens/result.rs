//! Result screen: end message, a short summary, and replay / new game / exit.

use crossterm::event::{Event, KeyCode};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::games::hanoi::{Outcome, PuzzleState};
use crate::tui::input::key_press;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::center_rect;

/// Shown once the game has been won or lost.
#[derive(Debug, Getters)]
pub struct ResultScreen {
    outcome: Outcome,
    state: Box<PuzzleState>,
    player_name: String,
}

impl ResultScreen {
    /// Creates the result screen for a finished game.
    #[instrument(skip(state, player_name))]
    pub fn new(outcome: Outcome, state: Box<PuzzleState>, player_name: String) -> Self {
        debug!(?outcome, moves = state.history().len(), "Initializing ResultScreen");
        Self {
            outcome,
            state,
            player_name,
        }
    }

    /// The end-of-game message for this outcome.
    pub fn message(&self) -> String {
        self.outcome.message(&self.player_name)
    }
}

impl Screen for ResultScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = center_rect(frame.area(), 64, 13);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Message
                Constraint::Min(6),    // Summary
                Constraint::Length(2), // Help
            ])
            .split(area);

        let color = if self.outcome.is_win() {
            Color::Green
        } else {
            Color::Red
        };
        let message = Paragraph::new(self.message())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, chunks[0]);

        let summary = vec![
            Line::from(format!("Disks: {}", self.state.num_disks())),
            Line::from(format!("Moves made: {}", self.state.history().len())),
            Line::from(format!("Moves left: {}", self.state.moves_remaining())),
            Line::from(format!("Lives left: {}", self.state.lives())),
            Line::from(format!("Final rods: {}", self.state.rods().display())),
        ];
        let summary = Paragraph::new(summary)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary, chunks[1]);

        let help = Paragraph::new("r: Replay  |  n: New game  |  q/Esc: Exit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, event, _area))]
    fn handle_event(&mut self, event: &Event, _area: Rect) -> ScreenTransition {
        let Some(key) = key_press(event) else {
            return ScreenTransition::Stay;
        };

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Replay requested");
                ScreenTransition::Replay
            }
            KeyCode::Char('n') | KeyCode::Char('N') => ScreenTransition::NewGame,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
