//! Play command implementation.

use super::{CliError, CostArgs};
use canopy::{Engine, Session};
use std::io;
use tracing::info;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the referee's input is malformed or stdout fails.
pub(crate) fn execute(costs: CostArgs) -> Result<(), CliError> {
    let engine = Engine::new(costs.into());
    info!(costs = ?engine.costs(), "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(stdin.lock(), stdout.lock(), engine).run()?;

    info!(
        turns = summary.turns,
        waits = summary.waits,
        grows = summary.grows,
        completes = summary.completes,
        "game over"
    );
    Ok(())
}
