//! First-class action types for the Tower of Hanoi.
//!
//! A successful move is a domain event: it is recorded in the history,
//! logged, and can be replayed. A rejected attempt is also a normal event
//! and carries the reason it was rejected.

use super::{Disk, RodIndex};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A disk transferred from one rod to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Rod the disk was taken from.
    pub from: RodIndex,
    /// Rod the disk was placed on.
    pub to: RodIndex,
    /// The disk that moved.
    pub disk: Disk,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "disk {}: {} -> {}",
            self.disk,
            self.from.label(),
            self.to.label()
        )
    }
}

/// Why an attempted move was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The source rod has no disk to move.
    #[display("There is no disk on the {} rod to move!", _0.label())]
    EmptySource(RodIndex),

    /// Source and destination are the same rod.
    #[display("A disk cannot be moved onto its own rod!")]
    SameRod(RodIndex),

    /// The disk is larger than the top disk of the destination.
    #[display("You cannot place a larger disk on a smaller disk! ({} onto {})", disk, onto)]
    LargerOntoSmaller {
        /// The disk being moved.
        disk: Disk,
        /// The top disk of the destination rod.
        onto: Disk,
    },
}

/// Result tag of a single `attempt_move` call.
///
/// `Won` and `LostMoves` only follow a successful move, `LostLives` only a
/// rejected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The disk moved and the game continues.
    Moved(Disk),
    /// The attempt was rejected; a life was lost but some remain.
    InvalidMove(MoveRejection),
    /// The move completed the tower on the destination rod.
    Won,
    /// The attempt was rejected and it cost the last life.
    LostLives,
    /// The move spent the last of the move budget without solving.
    LostMoves,
}

impl MoveOutcome {
    /// Returns true if this outcome ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Won | MoveOutcome::LostLives | MoveOutcome::LostMoves
        )
    }
}

/// A requested transfer from one rod to another, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Attempt {
    /// Rod whose top disk is held.
    pub from: RodIndex,
    /// Rod the player wants to drop it on.
    pub to: RodIndex,
}

impl From<(RodIndex, RodIndex)> for Attempt {
    fn from((from, to): (RodIndex, RodIndex)) -> Self {
        Self { from, to }
    }
}
