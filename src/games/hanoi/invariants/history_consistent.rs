//! History consistency invariant: the bookkeeping agrees with the history.

use super::super::state::STARTING_LIVES;
use super::super::PuzzleState;
use super::Invariant;

/// Invariant: the history, the spent budget and the rods agree.
///
/// Exactly one budgeted move is spent per recorded move, lives never exceed
/// the starting count, and the newest recorded disk sits on top of the rod
/// it was moved to. Only the newest entry is inspected; the move contract
/// checks each new entry against the state before it, and
/// [`replay_history`](crate::games::hanoi::replay_history) walks the whole
/// history when a full check is wanted.
pub struct HistoryConsistentInvariant;

impl Invariant<PuzzleState> for HistoryConsistentInvariant {
    fn holds(state: &PuzzleState) -> bool {
        let spent = state
            .num_disks()
            .move_budget()
            .checked_sub(state.moves_remaining())
            .and_then(|spent| usize::try_from(spent).ok());

        let newest_on_top = state
            .history()
            .last()
            .is_none_or(|mov| state.rods().top(mov.to) == Some(mov.disk));

        spent == Some(state.history().len()) && state.lives() <= STARTING_LIVES && newest_on_top
    }

    fn description() -> &'static str {
        "Move history agrees with the rods and the move budget"
    }
}
