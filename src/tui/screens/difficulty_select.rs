//! Difficulty selection screen: pick Easy, Medium or Hard.

use crossterm::event::{Event, KeyCode};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::settings::Difficulty;
use crate::tui::input::key_press;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::center_rect;

/// Menu of difficulty levels.
#[derive(Debug, Getters)]
pub struct DifficultySelectScreen {
    player_name: String,
    list_state: ListState,
}

impl DifficultySelectScreen {
    /// Creates the menu with the default level highlighted.
    #[instrument(skip(player_name))]
    pub fn new(player_name: String) -> Self {
        debug!(player_name = %player_name, "Initializing DifficultySelectScreen");
        let levels = Difficulty::all();
        let default = levels
            .iter()
            .position(|d| *d == Difficulty::default())
            .unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(default));
        Self {
            player_name,
            list_state,
        }
    }

    /// Returns the highlighted level.
    pub fn selected(&self) -> Option<Difficulty> {
        self.list_state
            .selected()
            .and_then(|i| Difficulty::all().get(i).copied())
    }

    fn select_previous(&mut self) {
        let count = Difficulty::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = Difficulty::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn start(difficulty: Difficulty) -> ScreenTransition {
        let disks = difficulty.disk_count();
        info!(%difficulty, disks = disks.get(), "Difficulty chosen");
        ScreenTransition::StartGame(disks)
    }
}

impl Screen for DifficultySelectScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = center_rect(frame.area(), 50, 12);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting
                Constraint::Min(5),    // Menu
                Constraint::Length(2), // Help
            ])
            .split(area);

        let greeting = Paragraph::new(format!("Welcome, {}!", self.player_name))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(greeting, chunks[0]);

        let items: Vec<ListItem> = Difficulty::all()
            .into_iter()
            .enumerate()
            .map(|(i, level)| {
                ListItem::new(format!(
                    "{}. {} ({} disks)",
                    i + 1,
                    level,
                    level.disk_count()
                ))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose a difficulty"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let help = Paragraph::new("↑/↓: Navigate  |  Enter or 1-3: Select  |  Esc: Quit")
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
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.selected() {
                Some(level) => Self::start(level),
                None => ScreenTransition::Stay,
            },
            KeyCode::Char(c @ '1'..='9') => {
                let index = usize::from(c as u8 - b'1');
                match Difficulty::all().get(index) {
                    Some(level) => Self::start(*level),
                    None => ScreenTransition::Stay,
                }
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
