//! CLI command implementations for Canopy.

pub(crate) mod decide;
pub(crate) mod play;
pub(crate) mod validate;

mod output;

use canopy::engine::{COMPLETE_COST, MEDIUM_GROW_BASE, SMALL_GROW_BASE};
use canopy::{CostModel, GameError, ProtocolError, SessionError};
use clap::{Args, ValueEnum};
use std::error::Error;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Output format for the `decide` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Sun price overrides shared by `play` and `decide`.
#[derive(Args, Debug, Clone, Copy)]
pub(crate) struct CostArgs {
    /// Sun cost of completing a large tree
    #[arg(long, default_value_t = COMPLETE_COST)]
    complete_cost: u32,

    /// Base sun cost of growing a small tree
    #[arg(long, default_value_t = SMALL_GROW_BASE)]
    small_grow_base: u32,

    /// Base sun cost of growing a medium tree
    #[arg(long, default_value_t = MEDIUM_GROW_BASE)]
    medium_grow_base: u32,
}

impl Default for CostArgs {
    fn default() -> Self {
        Self {
            complete_cost: COMPLETE_COST,
            small_grow_base: SMALL_GROW_BASE,
            medium_grow_base: MEDIUM_GROW_BASE,
        }
    }
}

impl From<CostArgs> for CostModel {
    fn from(args: CostArgs) -> Self {
        Self {
            complete: args.complete_cost,
            small_grow_base: args.small_grow_base,
            medium_grow_base: args.medium_grow_base,
            ..Self::default()
        }
    }
}

/// Install the stderr log subscriber.
///
/// stdout belongs to the referee, so diagnostics never go there.
///
/// # Errors
///
/// Returns an error if the filter directive does not parse.
pub(crate) fn init_logging(directive: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| CliError::new(format!("Invalid log level {directive:?}: {e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to install logger: {e}")))
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<ProtocolError> for CliError {
    fn from(e: ProtocolError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::new(e.to_string())
    }
}
