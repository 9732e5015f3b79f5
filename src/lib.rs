// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Canopy: a greedy bot for the tree-growing sun contest.
//!
//! The referee describes a hexagonal board once, then sends one snapshot per
//! turn. For each snapshot the bot answers with exactly one action:
//! `WAIT`, `GROW <cell>` or `COMPLETE <cell>`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session / Transcript replay       │
//! ├─────────────────────────────────────┤
//! │   Decision engine                   │
//! ├─────────────────────────────────────┤
//! │   Game model  │  Protocol reader    │
//! └─────────────────────────────────────┘
//! ```

pub mod engine;
pub mod error;
pub mod game;
pub mod protocol;
pub mod session;
pub mod transcript;

pub use engine::{CostModel, Decision, Engine, Reason};
pub use error::{GameError, ProtocolError, ProtocolResult, SessionError};

// Re-export key game types at crate root for convenience
pub use game::{Action, Board, Cell, CellIndex, SizeHistogram, Tree, TreeSize, Turn};
pub use session::{Session, SessionSummary};
pub use transcript::{Transcript, TurnRecord};
