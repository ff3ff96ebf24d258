//! Maps raw terminal events onto rod-level game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use strum::IntoEnumIterator;

use crate::games::hanoi::RodIndex;

/// Input on the game screen, already mapped to rods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Act on a specific rod (pick up from it, or drop onto it).
    Rod(RodIndex),
    /// Move the rod cursor one rod to the left.
    CursorLeft,
    /// Move the rod cursor one rod to the right.
    CursorRight,
    /// Act on the rod under the cursor.
    ActOnCursor,
    /// Put the held disk back.
    Release,
    /// Leave the game.
    Quit,
}

/// Maps a digit key to a rod: `1`, `2`, `3` are source, auxiliary, destination.
pub fn rod_for_key(code: KeyCode) -> Option<RodIndex> {
    match code {
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)?;
            let index = usize::try_from(digit).ok()?.checked_sub(1)?;
            RodIndex::from_index(index)
        }
        _ => None,
    }
}

/// Finds the rod whose drawn area contains the cell at `column`, `row`.
pub fn rod_at(column: u16, row: u16, towers: &[Rect; 3]) -> Option<RodIndex> {
    let cell = Position::new(column, row);
    RodIndex::iter().find(|rod| towers[rod.index()].contains(cell))
}

/// Returns the key if the event is a key press or repeat.
///
/// Some platforms also report key releases; those are dropped.
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(*key),
        _ => None,
    }
}

/// Maps a terminal event to game input, given where the rods are drawn.
pub fn game_input(event: &Event, towers: &[Rect; 3]) -> Option<GameInput> {
    if let Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        ..
    }) = event
    {
        return rod_at(*column, *row, towers).map(GameInput::Rod);
    }

    let key = key_press(event)?;
    if let Some(rod) = rod_for_key(key.code) {
        return Some(GameInput::Rod(rod));
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(GameInput::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(GameInput::CursorRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::ActOnCursor),
        KeyCode::Esc => Some(GameInput::Release),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}
