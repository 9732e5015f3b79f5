//! Decide command implementation.

use super::output::{JsonReport, format_text};
use super::{CliError, CostArgs, OutputFormat};
use canopy::{Engine, Transcript};
use std::path::Path;

/// Execute the decide command.
///
/// # Errors
///
/// Returns an error if the transcript cannot be read or replayed.
pub(crate) fn execute(
    transcript_path: &Path,
    format: OutputFormat,
    costs: CostArgs,
) -> Result<(), CliError> {
    print!("{}", render(transcript_path, format, costs)?);
    Ok(())
}

/// Replay a transcript file and render the decisions in `format`.
fn render(
    transcript_path: &Path,
    format: OutputFormat,
    costs: CostArgs,
) -> Result<String, CliError> {
    let transcript = Transcript::load(transcript_path).map_err(|e| {
        CliError::new(format!(
            "Failed to load transcript {}: {e}",
            transcript_path.display()
        ))
    })?;

    let engine = Engine::new(costs.into());
    let records = transcript.replay(&engine)?;
    let name = transcript_path.display().to_string();

    match format {
        OutputFormat::Text => Ok(format_text(&name, &records)),
        OutputFormat::Json => {
            let report = JsonReport {
                transcript: name,
                turns: records.len(),
                decisions: &records,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            Ok(json + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Day 0 completes the large tree on cell 1; day 1 has 3 sun and one small
    // tree, so it grows cell 0.
    const GAME: &str = "2\n0 1 1 -1 -1 -1 -1 -1\n1 3 -1 -1 -1 0 -1 -1\n\
                        0\n20\n10 0\n0 0 0\n2\n0 1 1 0\n1 3 1 0\n0\n\
                        1\n20\n3 4\n0 0 0\n1\n0 1 1 0\n0\n";

    fn write_game(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("game.txt");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_json_lists_every_decision() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_game(&dir, GAME);

        let output = render(&path, OutputFormat::Json, CostArgs::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["turns"], 2);
        assert_eq!(json["transcript"], path.display().to_string());
        assert_eq!(json["decisions"][0]["action"]["type"], "complete");
        assert_eq!(json["decisions"][0]["action"]["cell"], 1);
        assert_eq!(json["decisions"][1]["action"]["type"], "grow");
        assert_eq!(json["decisions"][1]["action"]["cell"], 0);
        assert_eq!(json["decisions"][1]["reason"], "grow_small");
    }

    #[test]
    fn test_text_uses_cost_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_game(&dir, GAME);
        let costs = CostArgs {
            small_grow_base: 4,
            ..CostArgs::default()
        };

        let output = render(&path, OutputFormat::Text, costs).unwrap();
        assert!(output.contains("COMPLETE 1"));
        assert!(output.contains("WAIT"));
        assert!(!output.contains("GROW"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = render(&path, OutputFormat::Text, CostArgs::default()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load transcript"));
    }
}
