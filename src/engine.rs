//! Greedy turn decision engine.
//!
//! Every turn the engine looks only at the current snapshot and picks one
//! action, in this priority order:
//!
//! 1. Complete the richest active large tree, if completion is affordable.
//! 2. Grow the richest active medium tree, if affordable.
//! 3. Grow the richest active small tree, if affordable.
//! 4. Wait.
//!
//! "Active" means ours and not dormant. Richness ties go to the lowest cell
//! index. Growth is priced by scarcity: the more trees of the target size
//! already stand on the board (either player's), the more a grow costs.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use crate::error::GameError;
use crate::game::{Action, Board, CellIndex, SizeHistogram, TreeSize, Turn};

/// Sun cost of completing a large tree.
pub const COMPLETE_COST: u32 = 4;

/// Base cost of growing a seed into a small tree.
pub const SEED_GROW_BASE: u32 = 1;

/// Base cost of growing a small tree into a medium tree.
pub const SMALL_GROW_BASE: u32 = 3;

/// Base cost of growing a medium tree into a large tree.
pub const MEDIUM_GROW_BASE: u32 = 7;

/// Sun prices used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    /// Cost of completing a large tree.
    pub complete: u32,
    /// Base cost of seed to small.
    pub seed_grow_base: u32,
    /// Base cost of small to medium.
    pub small_grow_base: u32,
    /// Base cost of medium to large.
    pub medium_grow_base: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            complete: COMPLETE_COST,
            seed_grow_base: SEED_GROW_BASE,
            small_grow_base: SMALL_GROW_BASE,
            medium_grow_base: MEDIUM_GROW_BASE,
        }
    }
}

impl CostModel {
    /// Cost of growing a tree of `size` one step, given every tree on the board.
    ///
    /// The base price plus one sun per tree already at the next size.
    /// Large trees cannot grow and have no price.
    #[must_use]
    pub fn grow_cost(&self, size: TreeSize, board_trees: &SizeHistogram) -> Option<u32> {
        let base = match size {
            TreeSize::Seed => self.seed_grow_base,
            TreeSize::Small => self.small_grow_base,
            TreeSize::Medium => self.medium_grow_base,
            TreeSize::Large => return None,
        };
        let next = size.grown()?;
        let crowding = u32::try_from(board_trees.count(next)).unwrap_or(u32::MAX);
        Some(base.saturating_add(crowding))
    }
}

/// Grow prices the engine compared against this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowCosts {
    /// Small to medium.
    pub small: u32,
    /// Medium to large.
    pub medium: u32,
}

/// Which rule produced the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// An active large tree and enough sun to complete it.
    CompleteLarge,
    /// An active medium tree and enough sun to grow it.
    GrowMedium,
    /// An active small tree and enough sun to grow it.
    GrowSmall,
    /// Active trees exist but none can be afforded.
    NothingAffordable,
    /// We have no tree that can act today.
    NoActiveTrees,
}

/// An action together with the facts it was chosen from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The chosen action.
    pub action: Action,
    /// Rule that fired.
    pub reason: Reason,
    /// Our active trees per size, before the action.
    pub my_active: SizeHistogram,
    /// Grow prices this turn.
    pub grow_costs: GrowCosts,
}

/// The turn decision engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    costs: CostModel,
}

impl Engine {
    /// Create an engine with the given prices.
    #[must_use]
    pub const fn new(costs: CostModel) -> Self {
        Self { costs }
    }

    /// Prices this engine uses.
    #[must_use]
    pub const fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Choose this turn's action without touching the turn.
    #[must_use]
    pub fn choose_action(&self, board: &Board, turn: &Turn) -> Action {
        self.decide(board, turn).action
    }

    /// Choose this turn's action and report why.
    #[must_use]
    pub fn decide(&self, board: &Board, turn: &Turn) -> Decision {
        let board_trees = turn.size_histogram();
        let my_active = SizeHistogram::from_trees(turn.my_active_trees());
        let grow_costs = GrowCosts {
            small: self.grow_cost(TreeSize::Small, &board_trees),
            medium: self.grow_cost(TreeSize::Medium, &board_trees),
        };

        let rules = [
            (TreeSize::Large, self.costs.complete, Reason::CompleteLarge),
            (TreeSize::Medium, grow_costs.medium, Reason::GrowMedium),
            (TreeSize::Small, grow_costs.small, Reason::GrowSmall),
        ];

        for (size, cost, reason) in rules {
            if turn.sun < cost {
                continue;
            }
            if let Some(cell) = richest_active(board, turn, size) {
                let action = match size {
                    TreeSize::Large => Action::Complete { cell },
                    _ => Action::Grow { cell },
                };
                return Decision {
                    action,
                    reason,
                    my_active,
                    grow_costs,
                };
            }
        }

        let reason = if my_active.total() == 0 {
            Reason::NoActiveTrees
        } else {
            Reason::NothingAffordable
        };
        Decision {
            action: Action::Wait,
            reason,
            my_active,
            grow_costs,
        }
    }

    /// Decide, then apply the action to `turn` so its trees reflect the move.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen action cannot be applied, which only
    /// happens when the turn's trees are inconsistent with themselves.
    pub fn play_turn(&self, board: &Board, turn: &mut Turn) -> Result<Decision, GameError> {
        let decision = self.decide(board, turn);
        decision.action.apply(turn)?;
        debug!(
            day = turn.day,
            sun = turn.sun,
            action = %decision.action,
            reason = ?decision.reason,
            "turn decided"
        );
        Ok(decision)
    }

    fn grow_cost(&self, size: TreeSize, board_trees: &SizeHistogram) -> u32 {
        self.costs.grow_cost(size, board_trees).unwrap_or(u32::MAX)
    }
}

/// Our richest active tree of `size`; ties go to the lowest cell index.
fn richest_active(board: &Board, turn: &Turn, size: TreeSize) -> Option<CellIndex> {
    turn.my_active_trees()
        .filter(|tree| tree.size == size)
        .map(|tree| (tree.cell, board.richness(tree.cell).unwrap_or(0)))
        .min_by_key(|&(cell, richness)| (Reverse(richness), cell))
        .map(|(cell, _)| cell)
}
