//! Game controller: the state machine driving the multi-screen TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use tracing::{debug, info, instrument};

use crate::games::hanoi::DiskCount;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{DifficultySelectScreen, InGameScreen, NameEntryScreen, ResultScreen};

const DEFAULT_PLAYER_NAME: &str = "Player";

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    DifficultySelect(DifficultySelectScreen),
    InGame(InGameScreen),
    Result(ResultScreen),
}

impl ActiveScreen {
    fn render(&self, frame: &mut Frame) {
        match self {
            ActiveScreen::NameEntry(s) => s.render(frame),
            ActiveScreen::DifficultySelect(s) => s.render(frame),
            ActiveScreen::InGame(s) => s.render(frame),
            ActiveScreen::Result(s) => s.render(frame),
        }
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> ScreenTransition {
        match self {
            ActiveScreen::NameEntry(s) => s.handle_event(event, area),
            ActiveScreen::DifficultySelect(s) => s.handle_event(event, area),
            ActiveScreen::InGame(s) => s.handle_event(event, area),
            ActiveScreen::Result(s) => s.handle_event(event, area),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ActiveScreen::NameEntry(_) => "NameEntry",
            ActiveScreen::DifficultySelect(_) => "DifficultySelect",
            ActiveScreen::InGame(_) => "InGame",
            ActiveScreen::Result(_) => "Result",
        }
    }
}

/// Controller that drives the screen state machine.
///
/// Call [`GameController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct GameController {
    player_name: Option<String>,
    num_disks: Option<DiskCount>,
}

impl GameController {
    /// Creates a controller. Whatever is already known (from settings or the
    /// command line) skips the matching screen.
    #[instrument]
    pub fn new(player_name: Option<String>, num_disks: Option<DiskCount>) -> Self {
        info!("Creating GameController");
        Self {
            player_name,
            num_disks,
        }
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        let mut screen = self.initial_screen();

        loop {
            let area = terminal.draw(|f| screen.render(f))?.area;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))? {
                let event = event::read()?;

                // Skip key release events (crossterm fires both press and release).
                if let Event::Key(key) = &event
                    && key.kind == KeyEventKind::Release
                {
                    continue;
                }

                screen = match self.step(screen, &event, area) {
                    Some(next) => next,
                    None => {
                        info!("Player quit");
                        return Ok(());
                    }
                };
            }
        }
    }

    fn step(
        &mut self,
        mut screen: ActiveScreen,
        event: &Event,
        area: Rect,
    ) -> Option<ActiveScreen> {
        let transition = screen.handle_event(event, area);
        self.apply_transition(transition, screen)
    }

    fn player(&self) -> String {
        self.player_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string())
    }

    fn initial_screen(&self) -> ActiveScreen {
        match (&self.player_name, self.num_disks) {
            (None, _) => ActiveScreen::NameEntry(NameEntryScreen::new()),
            (Some(name), None) => {
                ActiveScreen::DifficultySelect(DifficultySelectScreen::new(name.clone()))
            }
            (Some(name), Some(num_disks)) => {
                ActiveScreen::InGame(InGameScreen::new(name.clone(), num_disks))
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current), fields(screen = current.name()))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        if !matches!(transition, ScreenTransition::Stay) {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::NameEntered(name) => {
                info!(player_name = %name, "Player named");
                self.player_name = Some(name);
                Some(self.initial_screen())
            }

            ScreenTransition::StartGame(num_disks) => {
                self.num_disks = Some(num_disks);
                Some(ActiveScreen::InGame(InGameScreen::new(
                    self.player(),
                    num_disks,
                )))
            }

            ScreenTransition::GameOver { outcome, state } => {
                info!(?outcome, "Navigating to Result");
                Some(ActiveScreen::Result(ResultScreen::new(
                    outcome,
                    state,
                    self.player(),
                )))
            }

            ScreenTransition::Replay => {
                let num_disks = match &current {
                    ActiveScreen::Result(s) => s.state().num_disks(),
                    _ => match self.num_disks {
                        Some(n) => n,
                        None => return Some(self.initial_screen()),
                    },
                };
                info!(num_disks = num_disks.get(), "Replaying");
                Some(ActiveScreen::InGame(InGameScreen::new(
                    self.player(),
                    num_disks,
                )))
            }

            ScreenTransition::NewGame => {
                info!("Navigating to DifficultySelect");
                self.num_disks = None;
                Some(ActiveScreen::DifficultySelect(DifficultySelectScreen::new(
                    self.player(),
                )))
            }

            ScreenTransition::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn area() -> Rect {
        Rect::new(0, 0, 90, 24)
    }

    fn press(controller: &mut GameController, screen: ActiveScreen, code: KeyCode) -> ActiveScreen {
        controller
            .step(screen, &key(code), area())
            .expect("controller quit unexpectedly")
    }

    #[test]
    fn test_initial_screen_follows_settings() {
        let controller = GameController::new(None, None);
        assert_eq!(controller.initial_screen().name(), "NameEntry");

        let controller = GameController::new(Some("Ada".into()), None);
        assert_eq!(controller.initial_screen().name(), "DifficultySelect");

        let controller = GameController::new(Some("Ada".into()), DiskCount::new(3).ok());
        assert_eq!(controller.initial_screen().name(), "InGame");
    }

    #[test]
    fn test_full_flow_win_replay_new_game_quit() {
        let mut controller = GameController::new(None, None);
        let mut screen = controller.initial_screen();

        for c in "Ada".chars() {
            screen = press(&mut controller, screen, KeyCode::Char(c));
        }
        screen = press(&mut controller, screen, KeyCode::Enter);
        assert_eq!(screen.name(), "DifficultySelect");
        assert_eq!(controller.player_name().as_deref(), Some("Ada"));

        screen = press(&mut controller, screen, KeyCode::Char('1'));
        assert_eq!(screen.name(), "InGame");
        assert_eq!(controller.num_disks().map(DiskCount::get), Some(3));

        for (from, to) in [
            ('1', '3'),
            ('1', '2'),
            ('3', '2'),
            ('1', '3'),
            ('2', '1'),
            ('2', '3'),
            ('1', '3'),
        ] {
            screen = press(&mut controller, screen, KeyCode::Char(from));
            screen = press(&mut controller, screen, KeyCode::Char(to));
        }
        assert_eq!(screen.name(), "Result");
        match &screen {
            ActiveScreen::Result(s) => {
                assert_eq!(s.message(), "Congratulations, Ada! You have won the game.")
            }
            _ => unreachable!(),
        }

        screen = press(&mut controller, screen, KeyCode::Char('r'));
        match &screen {
            ActiveScreen::InGame(s) => {
                assert_eq!(s.engine().state().moves_remaining(), 7);
                assert_eq!(s.engine().state().lives(), 3);
            }
            other => panic!("expected InGame, got {}", other.name()),
        }

        screen = press(&mut controller, screen, KeyCode::Char('1'));
        screen = press(&mut controller, screen, KeyCode::Char('1'));
        assert_eq!(screen.name(), "InGame");

        let done = controller.step(screen, &key(KeyCode::Char('q')), area());
        assert!(done.is_none());
    }

    #[test]
    fn test_new_game_returns_to_difficulty() {
        let mut controller = GameController::new(Some("Ada".into()), DiskCount::new(1).ok());
        let mut screen = controller.initial_screen();
        screen = press(&mut controller, screen, KeyCode::Char('1'));
        screen = press(&mut controller, screen, KeyCode::Char('3'));
        assert_eq!(screen.name(), "Result");

        screen = press(&mut controller, screen, KeyCode::Char('n'));
        assert_eq!(screen.name(), "DifficultySelect");
        assert!(controller.num_disks().is_none());
    }
}
