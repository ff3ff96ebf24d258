//! Tower of Hanoi puzzle engine.

mod action;
mod contracts;
mod engine;
mod invariants;
mod phases;
mod rules;
mod state;
mod types;
mod typestate;

pub use action::{Attempt, Move, MoveOutcome, MoveRejection};
pub use contracts::{
    Contract, ContractViolation, DistinctRods, LegalMove, MoveContract, SmallerOntoLarger,
    SourceNotEmpty,
};
pub use engine::PuzzleEngine;
pub use invariants::{
    DiskConservationInvariant, HanoiInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, StackOrderInvariant,
};
pub use phases::{Outcome, Status};
pub use rules::{check_move, is_solved, is_valid_move, replay_history};
pub use state::{PuzzleState, STARTING_LIVES};
pub use types::{Disk, DiskCount, DiskCountError, MAX_DISKS, RodIndex, Rods};
pub use typestate::{PuzzleFinished, PuzzleHolding, PuzzleReady, PuzzleResult, Selection, Turn};
