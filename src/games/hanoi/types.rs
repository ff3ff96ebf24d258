//! Core domain types for the Tower of Hanoi.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Largest tower the engine accepts.
///
/// Keeps the move budget inside `u32`. A tower taller than the terminal
/// draws its bottom disks under a `+k more` marker.
pub const MAX_DISKS: u8 = 16;

/// A disk, identified by its size (1 is the smallest).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("{}", _0)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u8) -> Self {
        Self(size)
    }

    /// Returns the disk size.
    pub fn size(self) -> u8 {
        self.0
    }
}

/// Number of disks in a game, always within `1..=MAX_DISKS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[display("{}", _0)]
pub struct DiskCount(u8);

impl DiskCount {
    /// Validates a disk count.
    #[track_caller]
    #[instrument]
    pub fn new(count: u8) -> Result<Self, DiskCountError> {
        if (1..=MAX_DISKS).contains(&count) {
            Ok(Self(count))
        } else {
            Err(DiskCountError::new(count))
        }
    }

    /// Returns the count as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Minimum number of moves needed to solve: `2^n - 1`.
    pub fn move_budget(self) -> u32 {
        (1u32 << self.0) - 1
    }
}

impl TryFrom<u8> for DiskCount {
    type Error = DiskCountError;

    #[track_caller]
    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

/// Disk count outside the supported range.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Disk count {} is out of range (1..={}) at {}:{}",
    count,
    MAX_DISKS,
    file,
    line
)]
pub struct DiskCountError {
    /// The rejected count.
    pub count: u8,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl DiskCountError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(count: u8) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            count,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// One of the three rods.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum RodIndex {
    /// Rod 0, where the tower starts.
    Source,
    /// Rod 1.
    Auxiliary,
    /// Rod 2, where the tower must end up.
    Destination,
}

impl RodIndex {
    /// Returns the zero-based index of this rod.
    pub fn index(self) -> usize {
        match self {
            RodIndex::Source => 0,
            RodIndex::Auxiliary => 1,
            RodIndex::Destination => 2,
        }
    }

    /// Converts a zero-based index into a rod.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RodIndex::Source => "Source",
            RodIndex::Auxiliary => "Auxiliary",
            RodIndex::Destination => "Destination",
        }
    }

    /// The rod to the left, wrapping around.
    pub fn left(self) -> Self {
        match self {
            RodIndex::Source => RodIndex::Destination,
            RodIndex::Auxiliary => RodIndex::Source,
            RodIndex::Destination => RodIndex::Auxiliary,
        }
    }

    /// The rod to the right, wrapping around.
    pub fn right(self) -> Self {
        match self {
            RodIndex::Source => RodIndex::Auxiliary,
            RodIndex::Auxiliary => RodIndex::Destination,
            RodIndex::Destination => RodIndex::Source,
        }
    }
}

impl std::fmt::Display for RodIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}

/// The three rods, each a stack with its top at the end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rods {
    stacks: [Vec<Disk>; 3],
}

impl Rods {
    /// Creates the starting arrangement: every disk on the source rod, largest at the bottom.
    #[instrument]
    pub fn new(count: DiskCount) -> Self {
        let tower = (1..=count.get()).rev().map(Disk::new).collect();
        Self {
            stacks: [tower, Vec::new(), Vec::new()],
        }
    }

    /// Builds rods from explicit stacks (bottom to top).
    ///
    /// No ordering or conservation checks are done here; the invariants
    /// module exists to catch arrangements this lets through.
    pub fn from_sizes(stacks: [Vec<u8>; 3]) -> Self {
        Self {
            stacks: stacks.map(|stack| stack.into_iter().map(Disk::new).collect()),
        }
    }

    /// Disks on a rod, bottom to top.
    pub fn get(&self, rod: RodIndex) -> &[Disk] {
        &self.stacks[rod.index()]
    }

    /// The top disk of a rod, if any.
    pub fn top(&self, rod: RodIndex) -> Option<Disk> {
        self.stacks[rod.index()].last().copied()
    }

    /// Returns true if the rod holds no disks.
    pub fn is_empty(&self, rod: RodIndex) -> bool {
        self.stacks[rod.index()].is_empty()
    }

    /// Total number of disks across all rods.
    pub fn disk_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// All three stacks in rod order.
    pub fn stacks(&self) -> &[Vec<Disk>; 3] {
        &self.stacks
    }

    /// Disk sizes per rod, bottom to top.
    pub fn sizes(&self) -> [Vec<u8>; 3] {
        self.stacks
            .clone()
            .map(|stack| stack.into_iter().map(Disk::size).collect())
    }

    /// Moves the top disk from one rod to another (unchecked).
    ///
    /// Returns `None` and leaves the rods untouched if `from` is empty.
    pub(super) fn transfer(&mut self, from: RodIndex, to: RodIndex) -> Option<Disk> {
        let disk = self.stacks[from.index()].pop()?;
        self.stacks[to.index()].push(disk);
        Some(disk)
    }

    /// Formats the rods as a compact string, e.g. `[3 2 1] [] []`.
    pub fn display(&self) -> String {
        self.stacks
            .iter()
            .map(|stack| {
                let disks = stack
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("[{}]", disks)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_count_bounds() {
        assert!(DiskCount::new(0).is_err());
        assert!(DiskCount::new(1).is_ok());
        assert!(DiskCount::new(MAX_DISKS).is_ok());
        assert!(DiskCount::new(MAX_DISKS + 1).is_err());
    }

    #[test]
    fn test_move_budget() {
        assert_eq!(DiskCount::new(1).unwrap().move_budget(), 1);
        assert_eq!(DiskCount::new(3).unwrap().move_budget(), 7);
        assert_eq!(DiskCount::new(7).unwrap().move_budget(), 127);
        assert_eq!(DiskCount::new(MAX_DISKS).unwrap().move_budget(), 65_535);
    }

    #[test]
    fn test_initial_rods() {
        let rods = Rods::new(DiskCount::new(4).unwrap());
        assert_eq!(rods.sizes(), [vec![4, 3, 2, 1], vec![], vec![]]);
        assert_eq!(rods.top(RodIndex::Source), Some(Disk::new(1)));
        assert!(rods.is_empty(RodIndex::Auxiliary));
        assert_eq!(rods.display(), "[4 3 2 1] [] []");
    }

    #[test]
    fn test_transfer_from_empty_rod_is_noop() {
        let mut rods = Rods::new(DiskCount::new(2).unwrap());
        assert_eq!(rods.transfer(RodIndex::Auxiliary, RodIndex::Source), None);
        assert_eq!(rods.sizes(), [vec![2, 1], vec![], vec![]]);
    }

    #[test]
    fn test_rod_index_navigation() {
        assert_eq!(RodIndex::from_index(2), Some(RodIndex::Destination));
        assert_eq!(RodIndex::from_index(3), None);
        assert_eq!(RodIndex::Source.left(), RodIndex::Destination);
        assert_eq!(RodIndex::Destination.right(), RodIndex::Source);
    }
}
