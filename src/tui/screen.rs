//! Screen trait and transition type for the game's screen state machine.

use crossterm::event::Event;
use ratatui::{Frame, layout::Rect};

use crate::games::hanoi::{DiskCount, Outcome, PuzzleState};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_event`] to drive the
/// [`GameController`](super::GameController) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// The player entered a name; go to difficulty selection.
    NameEntered(String),
    /// Start a fresh game with the given number of disks.
    StartGame(DiskCount),
    /// The game ended; show the result.
    GameOver {
        /// How the game ended.
        outcome: Outcome,
        /// Final state of the puzzle.
        state: Box<PuzzleState>,
    },
    /// Play again with the same number of disks.
    Replay,
    /// Go back to difficulty selection.
    NewGame,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles input events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles an input event and returns the resulting [`ScreenTransition`].
    ///
    /// `area` is the area of the last rendered frame, for mapping mouse
    /// positions back onto widgets.
    fn handle_event(&mut self, event: &Event, area: Rect) -> ScreenTransition;
}
