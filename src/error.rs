//! Error types for reading the referee protocol and applying actions.

use std::fmt;
use std::io;

use crate::game::CellIndex;

/// Failure while reading the referee's line protocol.
///
/// Every variant that can be pinned to input carries the 1-based line number.
#[derive(Debug)]
pub enum ProtocolError {
    /// Underlying reader failed.
    Io(io::Error),
    /// Input ended in the middle of a block.
    UnexpectedEof {
        /// Line number that was expected next.
        line: usize,
    },
    /// A token could not be parsed as an integer.
    InvalidInteger {
        /// Line the token was on.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A line had fewer tokens than its schema requires.
    MissingField {
        /// Line with the missing token.
        line: usize,
        /// Name of the field that was expected.
        field: &'static str,
    },
    /// Cells must be listed in ascending index order.
    CellOutOfOrder {
        /// Line the cell was on.
        line: usize,
        /// Index the board expected next.
        expected: CellIndex,
        /// Index that was read.
        found: i64,
    },
    /// A tree or neighbour referenced a cell that is not on the board.
    UnknownCell {
        /// Line the reference was on.
        line: usize,
        /// The referenced index.
        cell: i64,
    },
    /// Two tree lines in one turn named the same cell.
    DuplicateTree {
        /// Line of the second tree.
        line: usize,
        /// The repeated cell.
        cell: CellIndex,
    },
    /// A tree size outside 0..=3.
    InvalidTreeSize {
        /// Line the tree was on.
        line: usize,
        /// The size that was read.
        size: i64,
    },
    /// A count or value that must be non-negative was negative.
    NegativeValue {
        /// Line the value was on.
        line: usize,
        /// Name of the field.
        field: &'static str,
        /// The value that was read.
        value: i64,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read failed: {e}"),
            Self::UnexpectedEof { line } => write!(f, "unexpected end of input at line {line}"),
            Self::InvalidInteger { line, token } => {
                write!(f, "line {line}: expected an integer, found {token:?}")
            }
            Self::MissingField { line, field } => write!(f, "line {line}: missing field `{field}`"),
            Self::CellOutOfOrder {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected cell {expected}, found cell {found}"),
            Self::UnknownCell { line, cell } => write!(f, "line {line}: unknown cell {cell}"),
            Self::DuplicateTree { line, cell } => {
                write!(f, "line {line}: cell {cell} already has a tree this turn")
            }
            Self::InvalidTreeSize { line, size } => {
                write!(f, "line {line}: tree size {size} is not in 0..=3")
            }
            Self::NegativeValue { line, field, value } => {
                write!(f, "line {line}: `{field}` must not be negative, found {value}")
            }
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for protocol reads.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// An action could not be applied to the turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// No tree stands on the targeted cell.
    MissingTree(CellIndex),
    /// The targeted tree is already at the largest size.
    FullyGrown(CellIndex),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTree(cell) => write!(f, "no tree on cell {cell}"),
            Self::FullyGrown(cell) => write!(f, "tree on cell {cell} cannot grow any further"),
        }
    }
}

impl std::error::Error for GameError {}

/// Failure of a full read-decide-print session.
#[derive(Debug)]
pub enum SessionError {
    /// Input could not be read or parsed.
    Protocol(ProtocolError),
    /// The chosen action could not be applied.
    Game(GameError),
    /// The action line could not be written.
    Output(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protocol(e) => write!(f, "protocol error: {e}"),
            Self::Game(e) => write!(f, "game error: {e}"),
            Self::Output(e) => write!(f, "write failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Protocol(e) => Some(e),
            Self::Game(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<ProtocolError> for SessionError {
    fn from(e: ProtocolError) -> Self {
        Self::Protocol(e)
    }
}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}
