//! Game rules for the Tower of Hanoi.
//!
//! Pure functions over rods and counters. Rules are kept apart from the
//! state so the contracts and the typestate phases can share them.

pub mod terminal;
pub mod validity;

pub use terminal::{is_solved, status_after_move, status_after_rejection};
pub use validity::{check_move, is_valid_move, replay_history};
