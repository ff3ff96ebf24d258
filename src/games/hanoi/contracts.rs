//! Contract-based validation for the Tower of Hanoi.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} attempt {Q}. A failed precondition is an
//! ordinary rejected move. A failed postcondition is a bug in the engine.

use super::action::{Attempt, Move, MoveRejection};
use super::invariants::{HanoiInvariants, InvariantSet};
use super::rules::check_move;
use super::{Disk, PuzzleState, Rods};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition failed: the engine produced an impossible state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Contract violation: {} at {}:{}", message, file, line)]
pub struct ContractViolation {
    /// What went wrong.
    pub message: String,
    /// Line number where the violation was detected.
    pub line: u32,
    /// Source file where the violation was detected.
    pub file: &'static str,
}

impl ContractViolation {
    /// Creates a new violation with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source rod must hold a disk.
pub struct SourceNotEmpty;

impl SourceNotEmpty {
    /// Returns the top disk of the source rod.
    #[instrument(skip(state))]
    pub fn check(attempt: &Attempt, state: &PuzzleState) -> Result<Disk, MoveRejection> {
        state
            .rods()
            .top(attempt.from)
            .ok_or(MoveRejection::EmptySource(attempt.from))
    }
}

/// Precondition: source and destination must be different rods.
pub struct DistinctRods;

impl DistinctRods {
    /// Rejects a drop back onto the source rod.
    #[instrument]
    pub fn check(attempt: &Attempt) -> Result<(), MoveRejection> {
        if attempt.from == attempt.to {
            Err(MoveRejection::SameRod(attempt.from))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the disk must land on an empty rod or a larger disk.
pub struct SmallerOntoLarger;

impl SmallerOntoLarger {
    /// Rejects `disk` if the destination's top disk is not larger.
    #[instrument(skip(state))]
    pub fn check(disk: Disk, attempt: &Attempt, state: &PuzzleState) -> Result<(), MoveRejection> {
        match state.rods().top(attempt.to) {
            Some(onto) if disk >= onto => Err(MoveRejection::LargerOntoSmaller { disk, onto }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal if the source holds a disk, the
/// rods differ, and the destination is empty or topped by a larger disk.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the disk that would move.
    #[instrument(skip(state))]
    pub fn check(attempt: &Attempt, state: &PuzzleState) -> Result<Disk, MoveRejection> {
        let checked = SourceNotEmpty::check(attempt, state).and_then(|disk| {
            DistinctRods::check(attempt)?;
            SmallerOntoLarger::check(disk, attempt, state)?;
            Ok(disk)
        });

        if let Err(rejection) = &checked {
            warn!(
                from = attempt.from.index(),
                to = attempt.to.index(),
                %rejection,
                "Move rejected"
            );
        }
        checked
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move attempts.
///
/// Preconditions:
/// - Source rod is non-empty
/// - Destination is empty or topped by a larger disk
///
/// Postconditions:
/// - All Hanoi invariants hold
/// - Move budget and lives never increase
/// - Exactly one of: a disk moved and one move was spent, or nothing
///   moved and one life was lost
/// - A move's newest history entry is legal on the rods before it and
///   produces the rods after it
/// - No rod is left selected
pub struct MoveContract;

impl Contract<PuzzleState, Attempt> for MoveContract {
    fn pre(state: &PuzzleState, action: &Attempt) -> Result<(), MoveRejection> {
        LegalMove::check(action, state).map(|_| ())
    }

    fn post(before: &PuzzleState, after: &PuzzleState) -> Result<(), ContractViolation> {
        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::new(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.moves_remaining() > before.moves_remaining() {
            return Err(ContractViolation::new("Move budget increased"));
        }
        if after.lives() > before.lives() {
            return Err(ContractViolation::new("Lives increased"));
        }
        if after.selected_rod().is_some() {
            return Err(ContractViolation::new("Rod still selected after attempt"));
        }

        let moved = after.history().len() == before.history().len() + 1
            && after.moves_remaining() + 1 == before.moves_remaining()
            && after.lives() == before.lives()
            && after
                .last_move()
                .is_some_and(|mov| newest_move_applies(before.rods(), mov, after.rods()));
        let rejected = after.history().len() == before.history().len()
            && after.rods() == before.rods()
            && after.moves_remaining() == before.moves_remaining()
            && after.lives() + 1 == before.lives();

        if moved || rejected {
            Ok(())
        } else {
            Err(ContractViolation::new(
                "Attempt neither moved a disk nor cost a life",
            ))
        }
    }
}

/// True if `mov` is legal on `before` and turns it into `after`.
fn newest_move_applies(before: &Rods, mov: &Move, after: &Rods) -> bool {
    if check_move(before, mov.from, mov.to) != Ok(mov.disk) {
        return false;
    }
    let mut replayed = before.clone();
    replayed.transfer(mov.from, mov.to);
    replayed == *after
}

/// Asserts the move contract's postcondition (debug builds only).
///
/// A violation is a programming defect, never a user-facing error.
#[instrument(skip_all)]
pub fn assert_postcondition(before: &PuzzleState, after: &PuzzleState) {
    if cfg!(debug_assertions)
        && let Err(violation) = MoveContract::post(before, after)
    {
        panic!("{}", violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{DiskCount, RodIndex};

    fn three() -> PuzzleState {
        PuzzleState::new(DiskCount::new(3).unwrap())
    }

    #[test]
    fn test_precondition_onto_empty_rod() {
        let attempt = Attempt::new(RodIndex::Source, RodIndex::Destination);
        assert!(MoveContract::pre(&three(), &attempt).is_ok());
    }

    #[test]
    fn test_precondition_empty_source() {
        let attempt = Attempt::new(RodIndex::Auxiliary, RodIndex::Destination);
        assert_eq!(
            MoveContract::pre(&three(), &attempt),
            Err(MoveRejection::EmptySource(RodIndex::Auxiliary))
        );
    }

    #[test]
    fn test_legal_move_agrees_with_rules() {
        use strum::IntoEnumIterator;

        let mut state = three();
        state
            .rods_mut()
            .transfer(RodIndex::Source, RodIndex::Auxiliary);
        for from in RodIndex::iter() {
            for to in RodIndex::iter() {
                let attempt = Attempt::new(from, to);
                assert_eq!(
                    LegalMove::check(&attempt, &state),
                    crate::games::hanoi::check_move(state.rods(), from, to)
                );
            }
        }
    }

    #[test]
    fn test_same_rod_rejected() {
        let attempt = Attempt::new(RodIndex::Source, RodIndex::Source);
        assert_eq!(
            MoveContract::pre(&three(), &attempt),
            Err(MoveRejection::SameRod(RodIndex::Source))
        );
    }

    #[test]
    fn test_postcondition_after_move() {
        let before = three();
        let mut after = before.clone();
        let disk = after
            .rods_mut()
            .transfer(RodIndex::Source, RodIndex::Destination)
            .unwrap();
        after.spend_move(Move::new(
            RodIndex::Source,
            RodIndex::Destination,
            disk,
        ));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_after_rejection() {
        let before = three();
        let mut after = before.clone();
        after.lose_life();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_free_move() {
        let before = three();
        let mut after = before.clone();
        after
            .rods_mut()
            .transfer(RodIndex::Source, RodIndex::Destination);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_no_effect() {
        let before = three();
        assert!(MoveContract::post(&before, &before.clone()).is_err());
    }

    #[test]
    fn test_postcondition_detects_misrecorded_move() {
        let before = three();
        let mut after = before.clone();
        after
            .rods_mut()
            .transfer(RodIndex::Source, RodIndex::Auxiliary);
        // Disk 1 did land on the auxiliary rod, but not from the destination.
        after.spend_move(Move::new(
            RodIndex::Destination,
            RodIndex::Auxiliary,
            Disk::new(1),
        ));
        assert!(HanoiInvariants::check_all(&after).is_ok());
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
