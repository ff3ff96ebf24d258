//! First-class invariants for the Tower of Hanoi.
//!
//! Invariants are logical properties that must hold for every reachable
//! puzzle state. They are checked after each attempt in debug builds and
//! are testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Invariants checked together, reporting every one that fails.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 3] = [
            (A::holds, A::description()),
            (B::holds, B::description()),
            (C::holds, C::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation { description })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod disk_conservation;
pub mod history_consistent;
pub mod stack_order;

pub use disk_conservation::DiskConservationInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use stack_order::StackOrderInvariant;

/// All Tower of Hanoi invariants as a composable set.
pub type HanoiInvariants = (
    DiskConservationInvariant,
    StackOrderInvariant,
    HistoryConsistentInvariant,
);
