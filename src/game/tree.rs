//! Trees and their size tiers.

use serde::Serialize;

use crate::game::CellIndex;

/// Growth tier of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TreeSize {
    /// Freshly planted.
    Seed = 0,
    /// First growth tier.
    Small = 1,
    /// Second growth tier.
    Medium = 2,
    /// Fully grown; the only size that can be completed.
    Large = 3,
}

impl TreeSize {
    /// All sizes, smallest first.
    pub const ALL: [TreeSize; 4] = [
        TreeSize::Seed,
        TreeSize::Small,
        TreeSize::Medium,
        TreeSize::Large,
    ];

    /// Convert a wire value.
    #[must_use]
    pub const fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Seed),
            1 => Some(Self::Small),
            2 => Some(Self::Medium),
            3 => Some(Self::Large),
            _ => None,
        }
    }

    /// The numeric tier, as written on the wire.
    #[must_use]
    pub const fn tier(self) -> usize {
        self as usize
    }

    /// The size after one growth step, `None` for a large tree.
    #[must_use]
    pub const fn grown(self) -> Option<Self> {
        match self {
            Self::Seed => Some(Self::Small),
            Self::Small => Some(Self::Medium),
            Self::Medium => Some(Self::Large),
            Self::Large => None,
        }
    }
}

/// A tree standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    /// Cell the tree occupies; also its identity.
    pub cell: CellIndex,
    /// Current size.
    pub size: TreeSize,
    /// Whether the tree belongs to us.
    pub is_mine: bool,
    /// Whether the tree has already acted today.
    pub is_dormant: bool,
}

impl Tree {
    /// Create an awake tree.
    #[must_use]
    pub const fn new(cell: CellIndex, size: TreeSize, is_mine: bool) -> Self {
        Self {
            cell,
            size,
            is_mine,
            is_dormant: false,
        }
    }

    /// Mark the tree dormant.
    #[must_use]
    pub const fn dormant(mut self) -> Self {
        self.is_dormant = true;
        self
    }

    /// Owned by us and still able to act today.
    #[must_use]
    #[inline]
    pub const fn is_active_mine(&self) -> bool {
        self.is_mine && !self.is_dormant
    }
}

/// Count of trees per size tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SizeHistogram([usize; 4]);

impl SizeHistogram {
    /// Count the sizes of the given trees.
    #[must_use]
    pub fn from_trees<'a>(trees: impl IntoIterator<Item = &'a Tree>) -> Self {
        let mut counts = [0; 4];
        for tree in trees {
            counts[tree.size.tier()] += 1;
        }
        Self(counts)
    }

    /// Number of trees of `size`.
    #[must_use]
    #[inline]
    pub const fn count(&self, size: TreeSize) -> usize {
        self.0[size.tier()]
    }

    /// Total number of trees counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}
