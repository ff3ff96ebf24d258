//! Terminal-condition detection.

use super::super::phases::Status;
use super::super::{DiskCount, RodIndex, Rods};
use tracing::instrument;

/// Returns true if every disk sits on the destination rod.
#[instrument(skip(rods))]
pub fn is_solved(rods: &Rods, count: DiskCount) -> bool {
    rods.is_empty(RodIndex::Source)
        && rods.is_empty(RodIndex::Auxiliary)
        && rods.get(RodIndex::Destination).len() == usize::from(count.get())
}

/// Status after a successful move.
///
/// The win check runs first, so solving on the last budgeted move wins.
#[instrument(skip(rods))]
pub fn status_after_move(rods: &Rods, count: DiskCount, moves_remaining: u32) -> Status {
    if is_solved(rods, count) {
        Status::Won
    } else if moves_remaining == 0 {
        Status::LostMoves
    } else {
        Status::InProgress
    }
}

/// Status after a rejected attempt.
#[instrument]
pub fn status_after_rejection(lives: u8) -> Status {
    if lives == 0 {
        Status::LostLives
    } else {
        Status::InProgress
    }
}
