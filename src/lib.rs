//! Strictly Hanoi library - a type-safe Tower of Hanoi engine
//!
//! The puzzle core enforces the rules through its types: a disk can only be
//! dropped while one is held, a finished game accepts no more moves, and every
//! transition is checked against the puzzle invariants in debug builds.
//!
//! # Architecture
//!
//! - **Games**: the Tower of Hanoi core (typestate phases, rules, contracts,
//!   invariants) and [`PuzzleEngine`], a runtime-checked wrapper over it
//! - **Settings**: player name and difficulty from TOML and the command line
//! - **TUI**: a `ratatui` screen state machine that drives the engine
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{DiskCount, MoveOutcome, PuzzleEngine, RodIndex};
//!
//! let mut engine = PuzzleEngine::initialize(DiskCount::new(1).unwrap());
//! assert!(engine.select_rod(RodIndex::Source));
//! assert_eq!(engine.attempt_move(RodIndex::Destination), MoveOutcome::Won);
//! assert!(engine.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod games;
mod settings;
mod tui;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Settings
pub use settings::{Difficulty, GameSettings, SettingsError};

// Crate-level exports - Tower of Hanoi
pub use games::hanoi::{
    Attempt, Contract, ContractViolation, Disk, DiskConservationInvariant, DiskCount,
    DiskCountError, DistinctRods, HanoiInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, LegalMove, MAX_DISKS, Move, MoveContract, MoveOutcome,
    MoveRejection, Outcome, PuzzleEngine, PuzzleFinished, PuzzleHolding, PuzzleReady,
    PuzzleResult, PuzzleState, RodIndex, Rods, STARTING_LIVES, Selection, SmallerOntoLarger,
    SourceNotEmpty, StackOrderInvariant, Status, Turn, check_move, is_solved, is_valid_move,
    replay_history,
};

// Crate-level exports - Terminal UI
pub use tui::{
    DifficultySelectScreen, GameController, GameInput, GameView, InGameScreen, NameEntryScreen,
    ResultScreen, Screen, ScreenTransition, center_rect, draw_game, game_input, init_tracing,
    rod_at, rod_for_key, run_tui, tower_areas,
};
