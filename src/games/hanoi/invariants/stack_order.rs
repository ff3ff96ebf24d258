//! Stack order invariant: no disk rests on a smaller one.

use super::super::PuzzleState;
use super::Invariant;

/// Invariant: every rod is strictly decreasing from bottom to top.
pub struct StackOrderInvariant;

impl Invariant<PuzzleState> for StackOrderInvariant {
    fn holds(state: &PuzzleState) -> bool {
        state
            .rods()
            .stacks()
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[0] > pair[1]))
    }

    fn description() -> &'static str {
        "Every rod has smaller disks on top of larger ones"
    }
}
