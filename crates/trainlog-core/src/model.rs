//! Core data model types for trainlog.
//!
//! A roster is a sequence of [`PersonRecord`]s, each holding that person's
//! raw completion history. Dates are already parsed; `None` means the source
//! had no date for that field.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completion of a training by a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEntry {
    /// Training name.
    pub name: String,
    /// When the training was completed.
    pub timestamp: Option<NaiveDate>,
    /// When the completion stops being valid.
    pub expires: Option<NaiveDate>,
}

impl CompletionEntry {
    pub fn new(
        name: impl Into<String>,
        timestamp: Option<NaiveDate>,
        expires: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            timestamp,
            expires,
        }
    }
}

/// A person and their full completion history, re-takes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// The person's name.
    pub name: String,
    /// Completion entries in source order.
    pub completions: Vec<CompletionEntry>,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, completions: Vec<CompletionEntry>) -> Self {
        Self {
            name: name.into(),
            completions,
        }
    }
}

/// How a training stands relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpirationStatus {
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "expires soon")]
    ExpiresSoon,
}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpirationStatus::Expired => write!(f, "expired"),
            ExpirationStatus::ExpiresSoon => write!(f, "expires soon"),
        }
    }
}

/// A training flagged by the expiration report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringTraining {
    pub training_name: String,
    #[serde(rename = "expiration_status")]
    pub status: ExpirationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(ExpirationStatus::Expired.to_string(), "expired");
        assert_eq!(ExpirationStatus::ExpiresSoon.to_string(), "expires soon");
    }

    #[test]
    fn expiring_training_json_shape() {
        let item = ExpiringTraining {
            training_name: "X-Ray Safety".into(),
            status: ExpirationStatus::ExpiresSoon,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["training_name"], "X-Ray Safety");
        assert_eq!(json["expiration_status"], "expires soon");
    }
}
