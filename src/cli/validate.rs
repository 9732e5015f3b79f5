//! Transcript validation command implementation.

use super::CliError;
use canopy::Transcript;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the transcript does not parse or breaks an invariant.
pub(crate) fn execute(transcript_path: &Path) -> Result<(), CliError> {
    let mut report = String::new();
    let result = check(transcript_path, &mut report);
    print!("{report}");
    result
}

/// Run every check on a transcript file, writing the check list to `out`.
///
/// The list is complete up to the first failing check even when an error is
/// returned.
fn check(transcript_path: &Path, out: &mut String) -> Result<(), CliError> {
    out.push_str(&format!("Validating: {}\n\n", transcript_path.display()));

    let transcript = match Transcript::load(transcript_path) {
        Ok(transcript) => {
            push_check(out, "Protocol", true);
            transcript
        }
        Err(e) => {
            push_check(out, "Protocol", false);
            return Err(e.into());
        }
    };

    let violations = transcript.violations();
    push_check(out, "Consistency", violations.is_empty());
    for violation in &violations {
        out.push_str(&format!("      {violation}\n"));
    }

    out.push_str("\nSummary:\n");
    out.push_str(&format!("  Cells:  {}\n", transcript.board.len()));
    out.push_str(&format!("  Turns:  {}\n", transcript.turns.len()));
    if let (Some(first), Some(last)) = (transcript.turns.first(), transcript.turns.last()) {
        out.push_str(&format!("  Days:   {}..={}\n", first.day, last.day));
    }

    if !violations.is_empty() {
        return Err(CliError::new(format!(
            "{} invariant violation(s)",
            violations.len()
        )));
    }

    out.push_str("\nValidation successful!\n");
    Ok(())
}

fn push_check(out: &mut String, name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    out.push_str(&format!("  {symbol} {name}: {status}\n"));
}
