//! Per-turn state snapshot.

use std::collections::BTreeMap;

use crate::game::{CellIndex, SizeHistogram, Tree};

/// What we know about the opponent this turn. Not used for decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Opponent {
    /// Opponent's sun points.
    pub sun: u32,
    /// Opponent's score.
    pub score: u32,
    /// Whether the opponent is asleep until the next day.
    pub is_waiting: bool,
}

/// The referee's snapshot of one turn.
///
/// Trees are keyed by cell and iterate in ascending cell order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    /// Day number, 0-based.
    pub day: u32,
    /// Base score gained by the next completion.
    pub nutrients: u32,
    /// Our sun points.
    pub sun: u32,
    /// Our score.
    pub score: u32,
    /// The opponent's public state.
    pub opponent: Opponent,
    /// Every tree on the board, ours and theirs.
    pub trees: BTreeMap<CellIndex, Tree>,
}

impl Turn {
    /// Create a turn with the given sun and no trees.
    #[must_use]
    pub fn with_sun(sun: u32) -> Self {
        Self {
            sun,
            ..Self::default()
        }
    }

    /// Add a tree, replacing any tree on the same cell.
    #[must_use]
    pub fn with_tree(mut self, tree: Tree) -> Self {
        self.trees.insert(tree.cell, tree);
        self
    }

    /// Look up the tree on a cell.
    #[must_use]
    pub fn tree(&self, cell: CellIndex) -> Option<&Tree> {
        self.trees.get(&cell)
    }

    /// Our trees that can still act today, in cell order.
    pub fn my_active_trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees.values().filter(|tree| tree.is_active_mine())
    }

    /// Size histogram over every tree on the board.
    #[must_use]
    pub fn size_histogram(&self) -> SizeHistogram {
        SizeHistogram::from_trees(self.trees.values())
    }
}
