//! Actions the bot can send to the referee.

use std::fmt;

use serde::Serialize;

use crate::error::GameError;
use crate::game::{CellIndex, Turn};

/// One turn's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Do nothing and sleep until the next day.
    Wait,
    /// Grow the tree on a cell by one size.
    Grow {
        /// Target cell.
        cell: CellIndex,
    },
    /// Harvest the large tree on a cell.
    Complete {
        /// Target cell.
        cell: CellIndex,
    },
}

impl Action {
    /// Cell this action targets, if any.
    #[must_use]
    pub const fn target(&self) -> Option<CellIndex> {
        match self {
            Self::Wait => None,
            Self::Grow { cell } | Self::Complete { cell } => Some(*cell),
        }
    }

    /// Apply the action's effect to the turn's trees.
    ///
    /// Complete removes the tree; Grow raises it one size and puts it to
    /// sleep for the rest of the day.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cell has no tree, or if a grow targets
    /// a large tree. The turn is left untouched in both cases.
    pub fn apply(&self, turn: &mut Turn) -> Result<(), GameError> {
        match *self {
            Self::Wait => Ok(()),
            Self::Complete { cell } => turn
                .trees
                .remove(&cell)
                .map(|_| ())
                .ok_or(GameError::MissingTree(cell)),
            Self::Grow { cell } => {
                let tree = turn.trees.get_mut(&cell).ok_or(GameError::MissingTree(cell))?;
                tree.size = tree.size.grown().ok_or(GameError::FullyGrown(cell))?;
                tree.is_dormant = true;
                Ok(())
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wait => write!(f, "WAIT"),
            Self::Grow { cell } => write!(f, "GROW {cell}"),
            Self::Complete { cell } => write!(f, "COMPLETE {cell}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Tree, TreeSize};

    #[test]
    fn test_render() {
        assert_eq!(Action::Wait.to_string(), "WAIT");
        assert_eq!(Action::Grow { cell: 12 }.to_string(), "GROW 12");
        assert_eq!(Action::Complete { cell: 0 }.to_string(), "COMPLETE 0");
    }

    #[test]
    fn test_wait_leaves_turn_unchanged() {
        let mut turn = Turn::with_sun(5).with_tree(Tree::new(2, TreeSize::Small, true));
        let before = turn.clone();
        Action::Wait.apply(&mut turn).unwrap();
        assert_eq!(turn, before);
    }

    #[test]
    fn test_grow_raises_size_and_sleeps() {
        let mut turn = Turn::with_sun(5).with_tree(Tree::new(2, TreeSize::Small, true));
        Action::Grow { cell: 2 }.apply(&mut turn).unwrap();

        let tree = turn.tree(2).unwrap();
        assert_eq!(tree.size, TreeSize::Medium);
        assert!(tree.is_dormant);
    }

    #[test]
    fn test_complete_removes_tree() {
        let mut turn = Turn::with_sun(5).with_tree(Tree::new(7, TreeSize::Large, true));
        Action::Complete { cell: 7 }.apply(&mut turn).unwrap();
        assert!(turn.tree(7).is_none());
        assert!(turn.trees.is_empty());
    }

    #[test]
    fn test_apply_to_missing_tree_fails() {
        let mut turn = Turn::with_sun(5);
        assert_eq!(
            Action::Complete { cell: 3 }.apply(&mut turn),
            Err(GameError::MissingTree(3))
        );
        assert_eq!(
            Action::Grow { cell: 3 }.apply(&mut turn),
            Err(GameError::MissingTree(3))
        );
    }

    #[test]
    fn test_grow_large_fails_without_mutation() {
        let mut turn = Turn::with_sun(5).with_tree(Tree::new(1, TreeSize::Large, true));
        let before = turn.clone();
        assert_eq!(
            Action::Grow { cell: 1 }.apply(&mut turn),
            Err(GameError::FullyGrown(1))
        );
        assert_eq!(turn, before);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Action::Grow { cell: 5 }).unwrap();
        assert_eq!(json, r#"{"type":"grow","cell":5}"#);
        let json = serde_json::to_string(&Action::Wait).unwrap();
        assert_eq!(json, r#"{"type":"wait"}"#);
    }
}
