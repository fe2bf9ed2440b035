//! Pretty-printed JSON output, indented by four spaces.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::Report;

/// Serialize a value as JSON indented by four spaces.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .context("failed to serialize report")?;
    String::from_utf8(buf).context("report JSON is not valid UTF-8")
}

/// Render the result mapping of a report as JSON.
pub fn render(report: &Report<'_>) -> Result<String> {
    match report {
        Report::Counts(counts) => to_pretty_json(counts),
        Report::FiscalYear { completions, .. } => to_pretty_json(completions),
        Report::Expiration { report, .. } => to_pretty_json(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trainlog_core::model::{ExpirationStatus, ExpiringTraining};
    use trainlog_core::query::{CompletionCounts, ExpirationReport};

    #[test]
    fn counts_use_four_space_indent() {
        let mut counts = CompletionCounts::new();
        counts.insert("Fire Safety".into(), 3);
        let json = render(&Report::Counts(&counts)).unwrap();
        assert_eq!(json, "{\n    \"Fire Safety\": 3\n}");
    }

    #[test]
    fn expiration_entries_keep_field_names() {
        let mut report = ExpirationReport::new();
        report.insert(
            "Ada".into(),
            vec![ExpiringTraining {
                training_name: "X-Ray Safety".into(),
                status: ExpirationStatus::Expired,
            }],
        );
        let json = render(&Report::Expiration {
            reference: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            report: &report,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Ada"][0]["training_name"], "X-Ray Safety");
        assert_eq!(value["Ada"][0]["expiration_status"], "expired");
    }
}
