//! Game model for the sun contest.
//!
//! - Static board of hexagonal cells with richness and neighbours
//! - Trees with size tiers, ownership and dormancy
//! - Per-turn snapshot received from the referee
//! - Actions and how they change a turn
//! - Consistency checks between board and turn

mod action;
mod board;
mod invariants;
mod tree;
mod turn;

pub use action::Action;
pub use board::{Board, Cell, CellIndex, DIRECTIONS};
pub use invariants::{InvariantViolation, check_board, check_turn};
pub use tree::{SizeHistogram, Tree, TreeSize};
pub use turn::{Opponent, Turn};
