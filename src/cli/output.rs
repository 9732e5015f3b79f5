//! Output formatting utilities for CLI.

use canopy::TurnRecord;
use serde::Serialize;

/// JSON-serializable replay report.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport<'a> {
    /// Transcript the report was built from.
    pub(super) transcript: String,
    /// Number of turns decided.
    pub(super) turns: usize,
    /// Per-turn decisions.
    pub(super) decisions: &'a [TurnRecord],
}

/// Format replay decisions as human-readable text.
pub(super) fn format_text(transcript: &str, records: &[TurnRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Decisions for {transcript}\n"));
    output.push_str(&format!("  Turns: {}\n\n", records.len()));

    for record in records {
        output.push_str(&format!(
            "  Day {:>2}  sun {:>3}  {:<12}  grow costs {}/{}  ({:?})\n",
            record.day,
            record.sun,
            record.action.to_string(),
            record.grow_costs.small,
            record.grow_costs.medium,
            record.reason,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy::engine::GrowCosts;
    use canopy::{Action, Reason, SizeHistogram};

    fn record(day: u32, action: Action, reason: Reason) -> TurnRecord {
        TurnRecord {
            day,
            sun: 8,
            action,
            reason,
            my_active: SizeHistogram::default(),
            grow_costs: GrowCosts { small: 3, medium: 7 },
        }
    }

    #[test]
    fn test_text_has_one_row_per_turn() {
        let records = [
            record(0, Action::Wait, Reason::NoActiveTrees),
            record(1, Action::Grow { cell: 4 }, Reason::GrowSmall),
        ];
        let text = format_text("game.txt", &records);
        assert!(text.starts_with("Decisions for game.txt\n"));
        assert!(text.contains("Turns: 2"));
        assert!(text.contains("GROW 4"));
        assert!(text.contains("GrowSmall"));
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with("Day")).count(), 2);
    }

    #[test]
    fn test_json_report_shape() {
        let records = [record(3, Action::Complete { cell: 1 }, Reason::CompleteLarge)];
        let report = JsonReport {
            transcript: "game.txt".to_string(),
            turns: records.len(),
            decisions: &records,
        };
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["turns"], 1);
        assert_eq!(json["decisions"][0]["action"]["type"], "complete");
        assert_eq!(json["decisions"][0]["reason"], "complete_large");
    }
}
