//! The three roster queries.
//!
//! Each query resolves every person's history with [`latest_completions`]
//! before aggregating, so retakes never inflate a result.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::date::FiscalYear;
use crate::latest::latest_completions;
use crate::model::{ExpirationStatus, ExpiringTraining, PersonRecord};

/// Days after the reference date during which a training "expires soon".
pub const DEFAULT_WARNING_WINDOW_DAYS: u32 = 30;

/// Training name -> number of distinct people who completed it.
pub type CompletionCounts = BTreeMap<String, usize>;

/// Training name -> people who completed it within the fiscal year.
pub type FiscalYearCompletions = BTreeMap<String, Vec<String>>;

/// Person name -> their expired or soon-to-expire trainings.
pub type ExpirationReport = BTreeMap<String, Vec<ExpiringTraining>>;

/// Count the distinct people who completed each training.
///
/// Trainings nobody completed are absent from the result.
pub fn count_completions(roster: &[PersonRecord]) -> CompletionCounts {
    let mut counts = CompletionCounts::new();

    for person in roster {
        for completion in latest_completions(&person.completions) {
            *counts.entry(completion.name.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// List who completed each of `training_names` within `fiscal_year`.
///
/// Every requested name is a key of the result, with an empty list when
/// nobody qualifies. Undated completions are never in range.
pub fn completions_in_fiscal_year<S: AsRef<str>>(
    roster: &[PersonRecord],
    training_names: &[S],
    fiscal_year: FiscalYear,
) -> FiscalYearCompletions {
    let mut by_training: FiscalYearCompletions = training_names
        .iter()
        .map(|name| (name.as_ref().to_string(), Vec::new()))
        .collect();

    for person in roster {
        for completion in latest_completions(&person.completions) {
            let Some(people) = by_training.get_mut(completion.name.as_str()) else {
                continue;
            };
            if completion.timestamp.is_some_and(|ts| fiscal_year.contains(ts)) {
                people.push(person.name.clone());
            }
        }
    }

    by_training
}

/// Report expired and soon-to-expire trainings as of `reference`, using the
/// default 30-day warning window.
pub fn expiring_trainings(roster: &[PersonRecord], reference: NaiveDate) -> ExpirationReport {
    expiring_trainings_within(roster, reference, DEFAULT_WARNING_WINDOW_DAYS)
}

/// Report expired and soon-to-expire trainings as of `reference`.
///
/// A training is expired when it expires strictly before `reference`, and
/// expires soon when it expires between `reference` and `reference +
/// window_days`, both inclusive. Trainings without an expiration date are
/// never reported, and people with nothing to report are left out. When two
/// records share a person name, the later record's findings win.
pub fn expiring_trainings_within(
    roster: &[PersonRecord],
    reference: NaiveDate,
    window_days: u32,
) -> ExpirationReport {
    let warning_until = reference
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut report = ExpirationReport::new();

    for person in roster {
        let flagged: Vec<ExpiringTraining> = latest_completions(&person.completions)
            .into_iter()
            .filter_map(|completion| {
                let expires = completion.expires?;
                let status = if expires < reference {
                    ExpirationStatus::Expired
                } else if expires <= warning_until {
                    ExpirationStatus::ExpiresSoon
                } else {
                    return None;
                };
                Some(ExpiringTraining {
                    training_name: completion.name.clone(),
                    status,
                })
            })
            .collect();

        if !flagged.is_empty() {
            report.insert(person.name.clone(), flagged);
        }
    }

    report
}
