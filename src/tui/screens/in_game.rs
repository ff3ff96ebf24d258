//! In-game screen: drives a [`PuzzleEngine`] from rod-level input.

use crossterm::event::Event;
use derive_getters::Getters;
use ratatui::{Frame, layout::Rect};
use tracing::{debug, info, instrument};

use crate::games::hanoi::{DiskCount, MoveOutcome, PuzzleEngine, RodIndex};
use crate::tui::input::{GameInput, game_input};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{self, GameView};

/// The running game.
#[derive(Debug, Getters)]
pub struct InGameScreen {
    engine: PuzzleEngine,
    player_name: String,
    cursor: RodIndex,
    notice: Option<String>,
}

impl InGameScreen {
    /// Starts a fresh game with `num_disks` disks.
    #[instrument(skip(player_name))]
    pub fn new(player_name: String, num_disks: DiskCount) -> Self {
        info!(player_name = %player_name, num_disks = num_disks.get(), "Starting game");
        Self {
            engine: PuzzleEngine::initialize(num_disks),
            player_name,
            cursor: RodIndex::Source,
            notice: None,
        }
    }

    /// Picks up from `rod` if nothing is held, otherwise drops onto it.
    ///
    /// Acting on the rod that is already held puts the disk back, so the
    /// engine never sees a move onto the same rod.
    #[instrument(skip(self))]
    fn act_on(&mut self, rod: RodIndex) -> ScreenTransition {
        match self.engine.selected_rod() {
            Some(held) if held == rod => {
                debug!(rod = %rod, "Putting disk back");
                self.engine.release();
                ScreenTransition::Stay
            }
            Some(_) => {
                let outcome = self.engine.attempt_move(rod);
                self.after_move(outcome)
            }
            None => {
                if !self.engine.select_rod(rod) {
                    debug!(rod = %rod, "Ignoring empty rod");
                }
                ScreenTransition::Stay
            }
        }
    }

    fn after_move(&mut self, outcome: MoveOutcome) -> ScreenTransition {
        if let MoveOutcome::InvalidMove(reason) = outcome {
            self.notice = Some(reason.to_string());
        }

        match self.engine.outcome() {
            Some(outcome) => {
                info!(?outcome, "Game over");
                ScreenTransition::GameOver {
                    outcome,
                    state: Box::new(self.engine.state().clone()),
                }
            }
            None => ScreenTransition::Stay,
        }
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let view = GameView {
            state: self.engine.state(),
            held: self.engine.selected_rod(),
            cursor: self.cursor,
            player_name: &self.player_name,
            notice: self.notice.as_deref(),
        };
        ui::draw_game(frame, &view);
    }

    #[instrument(skip(self, event))]
    fn handle_event(&mut self, event: &Event, area: Rect) -> ScreenTransition {
        let Some(input) = game_input(event, &ui::tower_areas(area)) else {
            return ScreenTransition::Stay;
        };

        if self.engine.is_terminal() {
            return match input {
                GameInput::Quit => ScreenTransition::Quit,
                _ => ScreenTransition::Stay,
            };
        }

        self.notice = None;

        match input {
            GameInput::Rod(rod) => {
                self.cursor = rod;
                self.act_on(rod)
            }
            GameInput::CursorLeft => {
                self.cursor = self.cursor.left();
                ScreenTransition::Stay
            }
            GameInput::CursorRight => {
                self.cursor = self.cursor.right();
                ScreenTransition::Stay
            }
            GameInput::ActOnCursor => self.act_on(self.cursor),
            GameInput::Release => {
                self.engine.release();
                ScreenTransition::Stay
            }
            GameInput::Quit => {
                info!("Player quit mid-game");
                ScreenTransition::Quit
            }
        }
    }
}
