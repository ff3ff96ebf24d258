//! Individual screen implementations.

mod difficulty_select;
mod in_game;
mod name_entry;
mod result;

pub use difficulty_select::DifficultySelectScreen;
pub use in_game::InGameScreen;
pub use name_entry::NameEntryScreen;
pub use result::ResultScreen;
