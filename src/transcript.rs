//! Captured referee input and offline replay.
//!
//! A transcript is exactly what the referee writes to the bot's stdin over a
//! game: the startup block followed by any number of turn blocks. Because the
//! referee resends the full state every turn, each turn can be decided on its
//! own without replaying the game's rules.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::engine::{Engine, GrowCosts, Reason};
use crate::error::{GameError, ProtocolResult};
use crate::game::{Action, Board, InvariantViolation, SizeHistogram, Turn, check_board, check_turn};
use crate::protocol::LineReader;

/// A full game's worth of referee input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// The static board.
    pub board: Board,
    /// Every turn snapshot, in order.
    pub turns: Vec<Turn>,
}

/// The engine's answer to one transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// Day of the turn.
    pub day: u32,
    /// Our sun points.
    pub sun: u32,
    /// The answer.
    pub action: Action,
    /// Rule that produced the answer.
    pub reason: Reason,
    /// Our active trees per size.
    pub my_active: SizeHistogram,
    /// Grow prices this turn.
    pub grow_costs: GrowCosts,
}

impl Transcript {
    /// Parse a transcript from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns the first protocol error in the input.
    pub fn parse<R: BufRead>(reader: R) -> ProtocolResult<Self> {
        let mut reader = LineReader::new(reader);
        let board = reader.read_board()?;
        let mut turns = Vec::new();
        while let Some(turn) = reader.read_turn(&board)? {
            turns.push(turn);
        }
        Ok(Self { board, turns })
    }

    /// Load a transcript file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not parse.
    pub fn load(path: &Path) -> ProtocolResult<Self> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Every invariant violation in the board and in each turn.
    #[must_use]
    pub fn violations(&self) -> Vec<InvariantViolation> {
        let mut violations = check_board(&self.board);
        for turn in &self.turns {
            violations.extend(check_turn(&self.board, turn));
        }
        violations
    }

    /// Decide every turn with `engine`.
    ///
    /// # Errors
    ///
    /// Returns an error if a chosen action cannot be applied to its turn.
    pub fn replay(&self, engine: &Engine) -> Result<Vec<TurnRecord>, GameError> {
        self.turns
            .iter()
            .map(|turn| {
                let mut turn = turn.clone();
                let decision = engine.play_turn(&self.board, &mut turn)?;
                Ok(TurnRecord {
                    day: turn.day,
                    sun: turn.sun,
                    action: decision.action,
                    reason: decision.reason,
                    my_active: decision.my_active,
                    grow_costs: decision.grow_costs,
                })
            })
            .collect()
    }
}
