//! Phase-specific typestate structs for the Tower of Hanoi.
//!
//! Each phase is its own type. A disk can only be dropped while one is
//! held, a rod can only be picked up while none is, and a finished puzzle
//! always carries an [`Outcome`], never an `Option<Outcome>`.

use super::action::{Attempt, Move, MoveOutcome};
use super::contracts::{LegalMove, assert_postcondition};
use super::phases::Outcome;
use super::rules;
use super::{Disk, DiskCount, PuzzleState, RodIndex};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Ready Phase
// ─────────────────────────────────────────────────────────────

/// Puzzle in progress with nothing held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleReady {
    state: PuzzleState,
}

impl PuzzleReady {
    /// Creates a fresh puzzle: all disks on the source rod, full budget, full lives.
    #[instrument]
    pub fn new(num_disks: DiskCount) -> Self {
        info!(
            num_disks = num_disks.get(),
            budget = num_disks.move_budget(),
            "Starting new puzzle"
        );
        Self {
            state: PuzzleState::new(num_disks),
        }
    }

    /// Returns the puzzle state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Picks up the top disk of `rod`.
    ///
    /// Selecting an empty rod changes nothing and costs nothing.
    #[instrument(skip(self))]
    pub fn select_rod(self, rod: RodIndex) -> Selection {
        match self.state.rods().top(rod) {
            Some(held) => {
                debug!(rod = rod.index(), disk = held.size(), "Disk picked up");
                let mut state = self.state;
                state.set_selected_rod(Some(rod));
                Selection::Holding(PuzzleHolding {
                    state,
                    from: rod,
                    held,
                })
            }
            None => {
                debug!(rod = rod.index(), "Empty rod selected, ignoring");
                Selection::Empty(self)
            }
        }
    }

    /// Resolves a whole attempt in one step, without a separate pick-up.
    ///
    /// Unlike [`PuzzleReady::select_rod`], an empty source rod here is a
    /// rejected move and costs a life.
    #[instrument(skip(self))]
    pub fn attempt(self, attempt: Attempt) -> Turn {
        resolve(self.state, attempt)
    }

    /// Plays a sequence of attempts from the initial state.
    ///
    /// Stops at the first terminal state; later attempts are ignored.
    #[instrument(skip(attempts), fields(attempt_count = attempts.len()))]
    pub fn replay(num_disks: DiskCount, attempts: &[Attempt]) -> PuzzleResult {
        let mut puzzle = PuzzleReady::new(num_disks);

        for attempt in attempts {
            match puzzle.attempt(*attempt).into_result() {
                PuzzleResult::Ready(next) => puzzle = next,
                finished @ PuzzleResult::Finished(_) => return finished,
            }
        }

        PuzzleResult::Ready(puzzle)
    }
}

/// Result of picking up a rod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A disk is now held.
    Holding(PuzzleHolding),
    /// The rod was empty; nothing changed.
    Empty(PuzzleReady),
}

impl Selection {
    /// Returns the puzzle state.
    pub fn state(&self) -> &PuzzleState {
        match self {
            Selection::Holding(holding) => holding.state(),
            Selection::Empty(ready) => ready.state(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Holding Phase
// ─────────────────────────────────────────────────────────────

/// Puzzle in progress with the top disk of one rod held.
///
/// Invariants enforced by type:
/// - The held rod is non-empty
/// - The state's selected rod equals `from`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleHolding {
    state: PuzzleState,
    from: RodIndex,
    held: Disk,
}

impl PuzzleHolding {
    /// Returns the puzzle state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Returns the rod the held disk was taken from.
    pub fn selected_rod(&self) -> RodIndex {
        self.from
    }

    /// Returns the held disk.
    pub fn held_disk(&self) -> Disk {
        self.held
    }

    /// Tries to drop the held disk on `dest`.
    ///
    /// A valid move spends one move; an invalid one costs one life and
    /// leaves every rod untouched. Either way the selection is cleared.
    #[instrument(skip(self), fields(from = self.from.index()))]
    pub fn attempt_move(self, dest: RodIndex) -> Turn {
        resolve(self.state, Attempt::new(self.from, dest))
    }

    /// Puts the held disk back without moving it. Costs nothing.
    #[instrument(skip(self), fields(from = self.from.index()))]
    pub fn release(self) -> PuzzleReady {
        debug!("Held disk released");
        let mut state = self.state;
        state.set_selected_rod(None);
        PuzzleReady { state }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Puzzle finished; the outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleFinished {
    state: PuzzleState,
    outcome: Outcome,
}

impl PuzzleFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final puzzle state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Starts over with the same number of disks.
    #[instrument(skip(self))]
    pub fn restart(self) -> PuzzleReady {
        PuzzleReady::new(self.state.num_disks())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Phase reached after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleResult {
    /// Game continues.
    Ready(PuzzleReady),
    /// Game finished.
    Finished(PuzzleFinished),
}

impl PuzzleResult {
    /// Returns the puzzle state.
    pub fn state(&self) -> &PuzzleState {
        match self {
            PuzzleResult::Ready(ready) => ready.state(),
            PuzzleResult::Finished(finished) => finished.state(),
        }
    }
}

/// What one attempt produced: the outcome tag and the next phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    outcome: MoveOutcome,
    result: PuzzleResult,
}

impl Turn {
    /// Returns the outcome tag of the attempt.
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }

    /// Returns the phase reached.
    pub fn result(&self) -> &PuzzleResult {
        &self.result
    }

    /// Consumes the turn, returning the phase reached.
    pub fn into_result(self) -> PuzzleResult {
        self.result
    }

    /// Returns the puzzle state after the attempt.
    pub fn state(&self) -> &PuzzleState {
        self.result.state()
    }
}

/// Applies an attempt to a state and settles the next phase.
fn resolve(state: PuzzleState, attempt: Attempt) -> Turn {
    // Debug builds keep a copy for the postcondition; it includes the history.
    let before = cfg!(debug_assertions).then(|| state.clone());
    let mut state = state;
    state.set_selected_rod(None);

    let (status, continuing) = match LegalMove::check(&attempt, &state) {
        Ok(disk) => {
            let moved = state.rods_mut().transfer(attempt.from, attempt.to);
            debug_assert_eq!(moved, Some(disk));
            state.spend_move(Move::new(attempt.from, attempt.to, disk));
            info!(
                disk = disk.size(),
                from = attempt.from.index(),
                to = attempt.to.index(),
                moves_remaining = state.moves_remaining(),
                "Disk moved"
            );
            let status =
                rules::status_after_move(state.rods(), state.num_disks(), state.moves_remaining());
            (status, MoveOutcome::Moved(disk))
        }
        Err(rejection) => {
            state.lose_life();
            info!(lives = state.lives(), %rejection, "Invalid move");
            let status = rules::status_after_rejection(state.lives());
            (status, MoveOutcome::InvalidMove(rejection))
        }
    };

    state.set_status(status);
    if let Some(before) = &before {
        assert_postcondition(before, &state);
    }

    let turn = match status.outcome() {
        None => Turn {
            outcome: continuing,
            result: PuzzleResult::Ready(PuzzleReady { state }),
        },
        Some(outcome) => {
            info!(%outcome, "Puzzle finished");
            Turn {
                outcome: terminal_tag(outcome),
                result: PuzzleResult::Finished(PuzzleFinished { state, outcome }),
            }
        }
    };
    debug_assert_eq!(turn.state().status(), status);
    turn
}

fn terminal_tag(outcome: Outcome) -> MoveOutcome {
    match outcome {
        Outcome::Won => MoveOutcome::Won,
        Outcome::LostLives => MoveOutcome::LostLives,
        Outcome::LostMoves => MoveOutcome::LostMoves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::Status;
    use RodIndex::*;

    fn three() -> DiskCount {
        DiskCount::new(3).unwrap()
    }

    fn hold(ready: PuzzleReady, rod: RodIndex) -> PuzzleHolding {
        match ready.select_rod(rod) {
            Selection::Holding(holding) => holding,
            Selection::Empty(_) => panic!("Expected a disk on {}", rod),
        }
    }

    #[test]
    fn test_select_empty_rod_is_noop() {
        let ready = PuzzleReady::new(three());
        let before = ready.clone();
        match ready.select_rod(Auxiliary) {
            Selection::Empty(after) => assert_eq!(after, before),
            Selection::Holding(_) => panic!("Empty rod should not be held"),
        }
    }

    #[test]
    fn test_select_marks_rod() {
        let holding = hold(PuzzleReady::new(three()), Source);
        assert_eq!(holding.selected_rod(), Source);
        assert_eq!(holding.held_disk(), Disk::new(1));
        assert_eq!(holding.state().selected_rod(), Some(Source));
    }

    #[test]
    fn test_release_costs_nothing() {
        let fresh = PuzzleReady::new(three());
        let ready = hold(fresh.clone(), Source).release();
        assert_eq!(ready, fresh);
    }

    #[test]
    fn test_valid_move_clears_selection() {
        let turn = hold(PuzzleReady::new(three()), Source).attempt_move(Destination);
        assert_eq!(turn.outcome(), MoveOutcome::Moved(Disk::new(1)));
        assert_eq!(turn.state().selected_rod(), None);
        assert_eq!(turn.state().moves_remaining(), 6);
        assert!(matches!(turn.result(), PuzzleResult::Ready(_)));
    }

    #[test]
    fn test_moved_disk_is_recorded_and_on_top() {
        let attempts: Vec<Attempt> = [
            (Source, Destination),
            (Source, Auxiliary),
            (Destination, Auxiliary),
        ]
        .into_iter()
        .map(Attempt::from)
        .collect();
        let result = PuzzleReady::replay(three(), &attempts);
        let state = result.state();

        assert_eq!(state.rods().sizes(), [vec![3], vec![2, 1], vec![]]);
        assert_eq!(
            state.history().iter().map(|m| m.disk.size()).collect::<Vec<_>>(),
            vec![1, 2, 1]
        );
        let replayed = crate::games::hanoi::replay_history(three(), state.history());
        assert_eq!(replayed.as_ref(), Some(state.rods()));
    }

    #[test]
    fn test_same_rod_is_rejected() {
        let turn = hold(PuzzleReady::new(three()), Source).attempt_move(Source);
        assert!(matches!(turn.outcome(), MoveOutcome::InvalidMove(_)));
        assert_eq!(turn.state().lives(), 2);
        assert_eq!(turn.state().rods().sizes(), [vec![3, 2, 1], vec![], vec![]]);
    }

    #[test]
    fn test_single_disk_wins_in_one() {
        let one = DiskCount::new(1).unwrap();
        let turn = hold(PuzzleReady::new(one), Source).attempt_move(Destination);
        assert_eq!(turn.outcome(), MoveOutcome::Won);
        assert_eq!(turn.state().moves_remaining(), 0);
        match turn.into_result() {
            PuzzleResult::Finished(finished) => assert_eq!(finished.outcome(), Outcome::Won),
            PuzzleResult::Ready(_) => panic!("Puzzle should be finished"),
        }
    }

    #[test]
    fn test_single_disk_wrong_rod_runs_out_of_moves() {
        let one = DiskCount::new(1).unwrap();
        let turn = hold(PuzzleReady::new(one), Source).attempt_move(Auxiliary);
        assert_eq!(turn.outcome(), MoveOutcome::LostMoves);
    }

    #[test]
    fn test_restart_keeps_disk_count() {
        let one = DiskCount::new(1).unwrap();
        let turn = hold(PuzzleReady::new(one), Source).attempt_move(Destination);
        let PuzzleResult::Finished(finished) = turn.into_result() else {
            panic!("Puzzle should be finished");
        };
        assert_eq!(finished.state().status(), Status::Won);
        assert_eq!(finished.restart(), PuzzleReady::new(one));
    }

    #[test]
    fn test_replay_stops_at_terminal_state() {
        let attempts: Vec<Attempt> = [(Auxiliary, Source); 5]
            .into_iter()
            .map(Attempt::from)
            .collect();
        let result = PuzzleReady::replay(three(), &attempts);
        match result {
            PuzzleResult::Finished(finished) => {
                assert_eq!(finished.outcome(), Outcome::LostLives);
                assert_eq!(finished.state().lives(), 0);
            }
            PuzzleResult::Ready(_) => panic!("Three rejections should end the game"),
        }
    }
}
