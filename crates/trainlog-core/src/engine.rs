//! Query engine over a loaded roster.
//!
//! The engine owns the roster for the length of a session so the same data can
//! be queried repeatedly with different parameters without reloading.

use chrono::NaiveDate;

use crate::date::FiscalYear;
use crate::model::PersonRecord;
use crate::query::{
    self, CompletionCounts, ExpirationReport, FiscalYearCompletions, DEFAULT_WARNING_WINDOW_DAYS,
};

/// Configuration for the query engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Days after the reference date that count as "expires soon".
    pub warning_window_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warning_window_days: DEFAULT_WARNING_WINDOW_DAYS,
        }
    }
}

/// Runs the reporting queries against an immutable roster.
#[derive(Debug, Clone)]
pub struct TrainingQueryEngine {
    roster: Vec<PersonRecord>,
    config: EngineConfig,
}

impl TrainingQueryEngine {
    pub fn new(roster: Vec<PersonRecord>, config: EngineConfig) -> Self {
        Self { roster, config }
    }

    /// The roster this engine queries.
    pub fn roster(&self) -> &[PersonRecord] {
        &self.roster
    }

    /// Number of distinct people per completed training.
    pub fn count_completions(&self) -> CompletionCounts {
        let counts = query::count_completions(&self.roster);
        tracing::debug!(
            people = self.roster.len(),
            trainings = counts.len(),
            "counted completions"
        );
        counts
    }

    /// People who completed each of `training_names` within `fiscal_year`.
    pub fn completions_in_fiscal_year<S: AsRef<str>>(
        &self,
        training_names: &[S],
        fiscal_year: FiscalYear,
    ) -> FiscalYearCompletions {
        let result = query::completions_in_fiscal_year(&self.roster, training_names, fiscal_year);
        tracing::debug!(
            %fiscal_year,
            requested = training_names.len(),
            matched = result.values().map(Vec::len).sum::<usize>(),
            "filtered completions by fiscal year"
        );
        result
    }

    /// Expired and soon-to-expire trainings as of `reference`, using the
    /// configured warning window.
    pub fn expiring_trainings(&self, reference: NaiveDate) -> ExpirationReport {
        let report = query::expiring_trainings_within(
            &self.roster,
            reference,
            self.config.warning_window_days,
        );
        tracing::debug!(
            %reference,
            window_days = self.config.warning_window_days,
            flagged_people = report.len(),
            "built expiration report"
        );
        report
    }
}
