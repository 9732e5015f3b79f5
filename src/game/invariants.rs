//! Consistency checks between the board and a turn snapshot.
//!
//! The protocol reader already rejects most of these, so on referee input
//! they should never trigger. They exist for hand-built states and for the
//! `validate` command.

use crate::game::{Board, Turn};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check the board on its own.
///
/// Every cell must sit at its own index and every neighbour must be on the board.
#[must_use]
pub fn check_board(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (position, cell) in board.cells().enumerate() {
        if cell.index != position {
            violations.push(InvariantViolation {
                message: format!("Cell {} stored at position {position}", cell.index),
            });
        }
        for neighbour in cell.adjacent() {
            if !board.contains(neighbour) {
                violations.push(InvariantViolation {
                    message: format!("Cell {} has neighbour {neighbour} off the board", cell.index),
                });
            }
        }
    }

    violations
}

/// Check a turn against the board.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_turn(board: &Board, turn: &Turn) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (&key, tree) in &turn.trees {
        if key != tree.cell {
            violations.push(InvariantViolation {
                message: format!("Tree keyed by cell {key} claims cell {}", tree.cell),
            });
        }
        if !board.contains(tree.cell) {
            violations.push(InvariantViolation {
                message: format!("Tree on cell {} which is not on the board", tree.cell),
            });
        }
    }

    violations
}
