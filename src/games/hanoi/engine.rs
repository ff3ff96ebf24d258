//! Runtime-checked puzzle engine over the typestate phases.
//!
//! Collaborators that hold one long-lived puzzle (a UI event loop, for one)
//! cannot thread a different type through every event. `PuzzleEngine`
//! stores whichever phase is current and exposes the two-phase protocol on
//! `&mut self`. Calls made out of sequence are contract violations and
//! panic.

use super::action::{Attempt, MoveOutcome};
use super::phases::Outcome;
use super::typestate::{PuzzleFinished, PuzzleHolding, PuzzleReady, PuzzleResult, Selection};
use super::{Disk, DiskCount, PuzzleState, RodIndex};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Ready(PuzzleReady),
    Holding(PuzzleHolding),
    Finished(PuzzleFinished),
    // Only observable if a transition panicked halfway.
    Vacant,
}

/// Tower of Hanoi engine: the single source of truth for legality and
/// game end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleEngine {
    phase: Phase,
}

impl PuzzleEngine {
    /// Starts a fresh game with `num_disks` disks on the source rod.
    #[instrument]
    pub fn initialize(num_disks: DiskCount) -> Self {
        Self {
            phase: Phase::Ready(PuzzleReady::new(num_disks)),
        }
    }

    /// Returns the current puzzle state.
    pub fn state(&self) -> &PuzzleState {
        match &self.phase {
            Phase::Ready(ready) => ready.state(),
            Phase::Holding(holding) => holding.state(),
            Phase::Finished(finished) => finished.state(),
            Phase::Vacant => panic!("PuzzleEngine used after a panicked transition"),
        }
    }

    /// Returns true once the game has been won or lost.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.phase {
            Phase::Finished(finished) => Some(finished.outcome()),
            _ => None,
        }
    }

    /// Returns the rod whose top disk is held, if any.
    pub fn selected_rod(&self) -> Option<RodIndex> {
        match &self.phase {
            Phase::Holding(holding) => Some(holding.selected_rod()),
            _ => None,
        }
    }

    /// Returns the held disk, if any.
    pub fn held_disk(&self) -> Option<Disk> {
        match &self.phase {
            Phase::Holding(holding) => Some(holding.held_disk()),
            _ => None,
        }
    }

    /// Picks up the top disk of `rod`.
    ///
    /// Returns true if a disk is now held; selecting an empty rod returns
    /// false and changes nothing.
    ///
    /// # Panics
    ///
    /// If a rod is already selected or the game is over.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn select_rod(&mut self, rod: RodIndex) -> bool {
        let ready = match self.take_phase() {
            Phase::Ready(ready) => ready,
            other => self.violation(other, "select_rod requires no rod to be selected"),
        };

        match ready.select_rod(rod) {
            Selection::Holding(holding) => {
                self.phase = Phase::Holding(holding);
                true
            }
            Selection::Empty(ready) => {
                self.phase = Phase::Ready(ready);
                false
            }
        }
    }

    /// Drops the held disk on `dest` and reports the outcome.
    ///
    /// # Panics
    ///
    /// If no rod is selected or the game is over.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, dest: RodIndex) -> MoveOutcome {
        let holding = match self.take_phase() {
            Phase::Holding(holding) => holding,
            other => self.violation(other, "attempt_move requires a selected rod"),
        };

        let turn = holding.attempt_move(dest);
        let outcome = turn.outcome();
        self.settle(turn.into_result());
        outcome
    }

    /// Resolves a full (source, destination) attempt without a pick-up step.
    ///
    /// An empty source rod counts as an invalid move here.
    ///
    /// # Panics
    ///
    /// If a rod is already selected or the game is over.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn play(&mut self, from: RodIndex, to: RodIndex) -> MoveOutcome {
        let ready = match self.take_phase() {
            Phase::Ready(ready) => ready,
            other => self.violation(other, "play requires no rod to be selected"),
        };

        let turn = ready.attempt(Attempt::new(from, to));
        let outcome = turn.outcome();
        self.settle(turn.into_result());
        outcome
    }

    /// Puts a held disk back. Returns false if nothing was held.
    #[instrument(skip(self))]
    pub fn release(&mut self) -> bool {
        match self.take_phase() {
            Phase::Holding(holding) => {
                self.phase = Phase::Ready(holding.release());
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Discards the current game and starts a fresh one with the same disk count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let num_disks = self.state().num_disks();
        debug!(num_disks = num_disks.get(), "Resetting puzzle");
        self.phase = match self.take_phase() {
            Phase::Finished(finished) => Phase::Ready(finished.restart()),
            _ => Phase::Ready(PuzzleReady::new(num_disks)),
        };
    }

    fn take_phase(&mut self) -> Phase {
        std::mem::replace(&mut self.phase, Phase::Vacant)
    }

    fn settle(&mut self, result: PuzzleResult) {
        self.phase = match result {
            PuzzleResult::Ready(ready) => Phase::Ready(ready),
            PuzzleResult::Finished(finished) => Phase::Finished(finished),
        };
    }

    #[track_caller]
    fn violation(&mut self, phase: Phase, message: &str) -> ! {
        let found = match &phase {
            Phase::Ready(_) => "no rod selected",
            Phase::Holding(_) => "a rod already selected",
            Phase::Finished(_) => "a finished game",
            Phase::Vacant => "a vacant engine",
        };
        self.phase = phase;
        panic!("Contract violation: {} (found {})", message, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::Status;

    fn engine(n: u8) -> PuzzleEngine {
        PuzzleEngine::initialize(DiskCount::new(n).unwrap())
    }

    #[test]
    fn test_select_then_move() {
        let mut engine = engine(3);
        assert!(engine.select_rod(RodIndex::Source));
        assert_eq!(engine.selected_rod(), Some(RodIndex::Source));
        assert_eq!(engine.held_disk(), Some(Disk::new(1)));

        let outcome = engine.attempt_move(RodIndex::Auxiliary);
        assert_eq!(outcome, MoveOutcome::Moved(Disk::new(1)));
        assert_eq!(engine.selected_rod(), None);
        assert_eq!(engine.state().rods().sizes(), [vec![3, 2], vec![1], vec![]]);
    }

    #[test]
    fn test_select_empty_rod_returns_false() {
        let mut engine = engine(3);
        assert!(!engine.select_rod(RodIndex::Destination));
        assert_eq!(engine.selected_rod(), None);
        assert_eq!(engine.state().lives(), 3);
    }

    #[test]
    fn test_release() {
        let mut engine = engine(2);
        assert!(!engine.release());
        engine.select_rod(RodIndex::Source);
        assert!(engine.release());
        assert_eq!(engine.selected_rod(), None);
        assert_eq!(engine.state().moves_remaining(), 3);
    }

    #[test]
    fn test_reset_after_finish() {
        let mut engine = engine(1);
        assert_eq!(
            engine.play(RodIndex::Source, RodIndex::Destination),
            MoveOutcome::Won
        );
        assert!(engine.is_terminal());
        assert_eq!(engine.outcome(), Some(Outcome::Won));

        engine.reset();
        assert!(!engine.is_terminal());
        assert_eq!(engine.state().status(), Status::InProgress);
        assert_eq!(engine.state().rods().sizes(), [vec![1], vec![], vec![]]);
    }

    #[test]
    #[should_panic(expected = "attempt_move requires a selected rod")]
    fn test_attempt_without_selection_panics() {
        let mut engine = engine(3);
        engine.attempt_move(RodIndex::Destination);
    }

    #[test]
    #[should_panic(expected = "select_rod requires no rod to be selected")]
    fn test_double_select_panics() {
        let mut engine = engine(3);
        engine.select_rod(RodIndex::Source);
        engine.select_rod(RodIndex::Auxiliary);
    }

    #[test]
    #[should_panic(expected = "found a finished game")]
    fn test_select_after_finish_panics() {
        let mut engine = engine(1);
        engine.play(RodIndex::Source, RodIndex::Destination);
        engine.select_rod(RodIndex::Destination);
    }
}
