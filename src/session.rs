//! The read-decide-print loop.
//!
//! Generic over the input and output streams, so the same loop drives the
//! real referee on stdin/stdout and in-memory buffers in tests.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::engine::Engine;
use crate::error::SessionError;
use crate::game::{Action, check_board};
use crate::protocol::LineReader;

/// Counts collected over one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Turns answered.
    pub turns: u32,
    /// Turns answered with WAIT.
    pub waits: u32,
    /// Turns answered with GROW.
    pub grows: u32,
    /// Turns answered with COMPLETE.
    pub completes: u32,
}

impl SessionSummary {
    fn record(&mut self, action: Action) {
        self.turns += 1;
        match action {
            Action::Wait => self.waits += 1,
            Action::Grow { .. } => self.grows += 1,
            Action::Complete { .. } => self.completes += 1,
        }
    }
}

/// One game against the referee.
#[derive(Debug)]
pub struct Session<R, W> {
    reader: LineReader<R>,
    writer: W,
    engine: Engine,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given streams.
    #[must_use]
    pub fn new(reader: R, writer: W, engine: Engine) -> Self {
        Self {
            reader: LineReader::new(reader),
            writer,
            engine,
        }
    }

    /// Play until the input closes.
    ///
    /// Reads the board once, then answers every turn with exactly one line,
    /// flushing after each so the referee never waits on a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if input is malformed or cut short, if a chosen action
    /// cannot be applied, or if writing the answer fails.
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        let board = self.reader.read_board()?;
        info!(cells = board.len(), "board loaded");
        for violation in check_board(&board) {
            warn!(%violation, "board");
        }

        let mut summary = SessionSummary::default();
        while let Some(mut turn) = self.reader.read_turn(&board)? {
            let decision = self.engine.play_turn(&board, &mut turn)?;
            writeln!(self.writer, "{}", decision.action).map_err(SessionError::Output)?;
            self.writer.flush().map_err(SessionError::Output)?;
            summary.record(decision.action);
        }

        info!(
            turns = summary.turns,
            lines = self.reader.lines_read(),
            "input closed"
        );
        Ok(summary)
    }
}
