//! Error types for roster loading and querying.
//!
//! Loader-level failures (missing or unreadable sources) are kept apart from
//! content failures (bad record shape, bad dates) so the CLI can decide whether
//! to fall back to the default roster without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// A non-empty date string that is not in `MM/DD/YYYY` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date {value:?}, expected MM/DD/YYYY")]
pub struct DateFormatError {
    /// The rejected input.
    pub value: String,
}

/// Errors produced while loading a roster or preparing a query.
#[derive(Debug, Error)]
pub enum TrainingError {
    /// The roster file does not exist.
    #[error("roster not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The roster file exists but could not be read or is not valid JSON.
    #[error("roster {} is unreadable: {reason}", path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// A record is missing a required field or has the wrong structure.
    #[error("record {index}: {reason}")]
    RecordShape { index: usize, reason: String },

    /// A completion entry carries a malformed date.
    #[error("{person}: invalid {field} for {training:?}")]
    DateFormat {
        person: String,
        training: String,
        field: &'static str,
        #[source]
        source: DateFormatError,
    },

    /// The fiscal year's bounds cannot be represented as calendar dates.
    #[error("invalid fiscal year: {0}")]
    InvalidFiscalYear(i32),

    /// The configuration file could not be read or parsed.
    #[error("config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl TrainingError {
    /// Returns `true` for failures to obtain the roster source itself, as
    /// opposed to problems with its content.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            TrainingError::SourceNotFound(_) | TrainingError::SourceUnreadable { .. }
        )
    }
}
