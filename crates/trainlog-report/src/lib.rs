//! trainlog-report — Rendering of query results for people to read.
//!
//! The query functions return plain maps; this crate turns them into text
//! tables, pretty-printed JSON, or markdown.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;

use trainlog_core::date::FiscalYear;
use trainlog_core::query::{CompletionCounts, ExpirationReport, FiscalYearCompletions};

pub mod json;
pub mod markdown;
pub mod text;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Markdown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
            Format::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "markdown" | "md" => Ok(Format::Markdown),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// A query result together with the parameters it was produced for.
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// Distinct people per completed training.
    Counts(&'a CompletionCounts),
    /// People per training within a fiscal year.
    FiscalYear {
        fiscal_year: FiscalYear,
        completions: &'a FiscalYearCompletions,
    },
    /// Expired and soon-to-expire trainings per person.
    Expiration {
        reference: NaiveDate,
        report: &'a ExpirationReport,
    },
}

/// Render a report in the requested format.
pub fn render(report: &Report<'_>, format: Format) -> Result<String> {
    match format {
        Format::Json => json::render(report),
        Format::Text => Ok(text::render(report)),
        Format::Markdown => Ok(markdown::render(report)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_display_and_parse() {
        assert_eq!(Format::Markdown.to_string(), "markdown");
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("txt".parse::<Format>().unwrap(), Format::Text);
        assert!("html".parse::<Format>().is_err());
    }

    #[test]
    fn render_dispatches_by_format() {
        let mut counts = CompletionCounts::new();
        counts.insert("X-Ray Safety".into(), 2);
        let report = Report::Counts(&counts);

        assert!(render(&report, Format::Json).unwrap().starts_with('{'));
        assert!(render(&report, Format::Markdown).unwrap().contains("| X-Ray Safety | 2 |"));
        assert!(render(&report, Format::Text).unwrap().contains("X-Ray Safety"));
    }
}
