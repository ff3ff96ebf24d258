//! Name entry screen: the player types a name before choosing a difficulty.

use crossterm::event::{Event, KeyCode};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::tui::input::key_press;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::center_rect;

const MAX_NAME_LEN: usize = 24;

/// Text input for the player's name.
#[derive(Debug, Default, Getters)]
pub struct NameEntryScreen {
    input: String,
}

impl NameEntryScreen {
    /// Creates an empty name entry screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing NameEntryScreen");
        Self::default()
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = center_rect(frame.area(), 50, 9);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input
                Constraint::Length(3), // Help
            ])
            .split(area);

        let title = Paragraph::new("Tower of Hanoi")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(format!("{}_", self.input))
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Enter your name"),
            );
        frame.render_widget(input, chunks[1]);

        let help = Paragraph::new("Enter: Continue  |  Esc: Quit")
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
            KeyCode::Enter => {
                let name = self.input.trim();
                if name.is_empty() {
                    ScreenTransition::Stay
                } else {
                    debug!(name = %name, "Name entered");
                    ScreenTransition::NameEntered(name.to_string())
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Char(c) if !c.is_control() && self.input.chars().count() < MAX_NAME_LEN => {
                self.input.push(c);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}
