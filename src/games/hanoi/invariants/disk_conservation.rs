//! Disk conservation invariant: the rods partition exactly {1..N}.

use super::super::PuzzleState;
use super::Invariant;

/// Invariant: every disk `1..=N` appears on exactly one rod.
///
/// No disk is ever duplicated, lost, or invented by a move.
pub struct DiskConservationInvariant;

impl Invariant<PuzzleState> for DiskConservationInvariant {
    fn holds(state: &PuzzleState) -> bool {
        let count = usize::from(state.num_disks().get());
        let mut seen = vec![false; count];

        for disk in state.rods().stacks().iter().flatten() {
            let size = usize::from(disk.size());
            if size == 0 || size > count || seen[size - 1] {
                return false;
            }
            seen[size - 1] = true;
        }

        seen.into_iter().all(|present| present)
    }

    fn description() -> &'static str {
        "Rods hold each disk 1..=N exactly once"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{DiskCount, Rods};

    fn state_with(rods: [Vec<u8>; 3]) -> PuzzleState {
        let mut state = PuzzleState::new(DiskCount::new(3).unwrap());
        *state.rods_mut() = Rods::from_sizes(rods);
        state
    }

    #[test]
    fn test_new_game_holds() {
        assert!(DiskConservationInvariant::holds(&PuzzleState::new(
            DiskCount::new(7).unwrap()
        )));
    }

    #[test]
    fn test_spread_across_rods_holds() {
        assert!(DiskConservationInvariant::holds(&state_with([
            vec![3],
            vec![2],
            vec![1]
        ])));
    }

    #[test]
    fn test_missing_disk_violates() {
        assert!(!DiskConservationInvariant::holds(&state_with([
            vec![3, 2],
            vec![],
            vec![]
        ])));
    }

    #[test]
    fn test_duplicate_disk_violates() {
        assert!(!DiskConservationInvariant::holds(&state_with([
            vec![3, 2, 1],
            vec![],
            vec![1]
        ])));
    }

    #[test]
    fn test_foreign_disk_violates() {
        assert!(!DiskConservationInvariant::holds(&state_with([
            vec![4, 2, 1],
            vec![],
            vec![]
        ])));
    }
}
