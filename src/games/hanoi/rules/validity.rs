//! Move validity.

use super::super::action::{Move, MoveRejection};
use super::super::{Disk, DiskCount, RodIndex, Rods};
use tracing::instrument;

/// Checks whether the top disk of `from` may be placed on `to`.
///
/// Returns the disk that would move. A move is valid iff the source rod is
/// non-empty and the destination is empty or topped by a larger disk. A rod
/// onto itself never qualifies, since a disk is never smaller than itself.
#[instrument(skip(rods))]
pub fn check_move(rods: &Rods, from: RodIndex, to: RodIndex) -> Result<Disk, MoveRejection> {
    let disk = rods.top(from).ok_or(MoveRejection::EmptySource(from))?;
    if from == to {
        return Err(MoveRejection::SameRod(from));
    }
    match rods.top(to) {
        Some(onto) if disk >= onto => Err(MoveRejection::LargerOntoSmaller { disk, onto }),
        _ => Ok(disk),
    }
}

/// Returns true if the move from `from` to `to` is legal.
pub fn is_valid_move(rods: &Rods, from: RodIndex, to: RodIndex) -> bool {
    check_move(rods, from, to).is_ok()
}

/// Replays `history` from the starting tower of `count` disks.
///
/// Returns `None` if a recorded move is illegal or moves a different disk
/// than it records. Cost grows with the history, so the per-move checks
/// look only at the newest entry.
#[instrument(skip(history), fields(moves = history.len()))]
pub fn replay_history(count: DiskCount, history: &[Move]) -> Option<Rods> {
    let mut rods = Rods::new(count);
    for mov in history {
        if check_move(&rods, mov.from, mov.to) != Ok(mov.disk) {
            return None;
        }
        rods.transfer(mov.from, mov.to);
    }
    Some(rods)
}
