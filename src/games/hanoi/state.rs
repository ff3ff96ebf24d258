//! Puzzle state shared by every phase.

use super::action::Move;
use super::phases::Status;
use super::{DiskCount, RodIndex, Rods};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Lives granted at the start of every game.
pub const STARTING_LIVES: u8 = 3;

/// Complete puzzle state.
///
/// Mutated only through the typestate phases, which keep `selected_rod`
/// and `status` consistent with the phase that owns the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    rods: Rods,
    num_disks: DiskCount,
    selected_rod: Option<RodIndex>,
    moves_remaining: u32,
    lives: u8,
    status: Status,
    history: Vec<Move>,
}

impl PuzzleState {
    /// Creates the starting state for `num_disks` disks.
    #[instrument]
    pub fn new(num_disks: DiskCount) -> Self {
        Self {
            rods: Rods::new(num_disks),
            num_disks,
            selected_rod: None,
            moves_remaining: num_disks.move_budget(),
            lives: STARTING_LIVES,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the rods.
    pub fn rods(&self) -> &Rods {
        &self.rods
    }

    /// Returns the number of disks in play.
    pub fn num_disks(&self) -> DiskCount {
        self.num_disks
    }

    /// Returns the rod whose top disk is held, if any.
    pub fn selected_rod(&self) -> Option<RodIndex> {
        self.selected_rod
    }

    /// Returns the remaining move budget.
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    /// Returns the remaining lives.
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Successful moves so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent successful move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub(super) fn rods_mut(&mut self) -> &mut Rods {
        &mut self.rods
    }

    pub(super) fn set_selected_rod(&mut self, rod: Option<RodIndex>) {
        self.selected_rod = rod;
    }

    pub(super) fn spend_move(&mut self, mov: Move) {
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        self.history.push(mov);
    }

    pub(super) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub(super) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
