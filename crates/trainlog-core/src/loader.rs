//! JSON roster loader.
//!
//! Loads a roster from a JSON file, converts its date strings into typed
//! dates, and validates it for issues that do not stop the queries from
//! running.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::date::parse_date;
use crate::error::TrainingError;
use crate::model::{CompletionEntry, PersonRecord};

/// Intermediate JSON structure for a person record.
#[derive(Debug, Deserialize)]
struct RawPerson {
    name: String,
    completions: Vec<RawCompletion>,
}

#[derive(Debug, Deserialize)]
struct RawCompletion {
    name: String,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    expires: Option<String>,
}

/// Load a roster from a JSON file.
pub fn load_roster(path: &Path) -> Result<Vec<PersonRecord>, TrainingError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TrainingError::SourceNotFound(path.to_path_buf()),
        _ => TrainingError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let roster = parse_roster_str(&content, path)?;
    tracing::debug!(path = %path.display(), people = roster.len(), "loaded roster");
    Ok(roster)
}

/// Parse a JSON string into a roster (useful for testing).
pub fn parse_roster_str(
    content: &str,
    source_path: &Path,
) -> Result<Vec<PersonRecord>, TrainingError> {
    let document: Value =
        serde_json::from_str(content).map_err(|e| TrainingError::SourceUnreadable {
            path: source_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let Value::Array(records) = document else {
        return Err(TrainingError::RecordShape {
            index: 0,
            reason: "expected a top-level array of person records".into(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let raw: RawPerson =
                serde_json::from_value(record).map_err(|e| TrainingError::RecordShape {
                    index,
                    reason: e.to_string(),
                })?;
            convert_person(raw)
        })
        .collect()
}

fn convert_person(raw: RawPerson) -> Result<PersonRecord, TrainingError> {
    let completions = raw
        .completions
        .into_iter()
        .map(|c| {
            let date_field = |field: &'static str, value: Option<String>| {
                parse_date(value.as_deref().unwrap_or_default()).map_err(|source| {
                    TrainingError::DateFormat {
                        person: raw.name.clone(),
                        training: c.name.clone(),
                        field,
                        source,
                    }
                })
            };
            let timestamp = date_field("timestamp", c.timestamp)?;
            let expires = date_field("expires", c.expires)?;
            Ok(CompletionEntry {
                name: c.name,
                timestamp,
                expires,
            })
        })
        .collect::<Result<Vec<_>, TrainingError>>()?;

    Ok(PersonRecord {
        name: raw.name,
        completions,
    })
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The person the warning concerns.
    pub person: String,
    /// Warning message.
    pub message: String,
}

/// Validate a roster for issues that skew reports without breaking them.
pub fn validate_roster(roster: &[PersonRecord]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate person names
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for person in roster {
        let count = seen.entry(person.name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            warnings.push(ValidationWarning {
                person: person.name.clone(),
                message: "duplicate person name; the expiration report keeps only the last record"
                    .into(),
            });
        }
    }

    for person in roster {
        if person.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                person: person.name.clone(),
                message: "person name is empty".into(),
            });
        }

        if person.completions.is_empty() {
            warnings.push(ValidationWarning {
                person: person.name.clone(),
                message: "no completions recorded".into(),
            });
        }

        for completion in &person.completions {
            if completion.name.trim().is_empty() {
                warnings.push(ValidationWarning {
                    person: person.name.clone(),
                    message: "completion has an empty training name".into(),
                });
            }
            if completion.timestamp.is_none() {
                warnings.push(ValidationWarning {
                    person: person.name.clone(),
                    message: format!(
                        "{:?} has no timestamp and never counts toward a fiscal year",
                        completion.name
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    const VALID_JSON: &str = r#"[
  {
    "name": "Ada Lovelace",
    "completions": [
      { "name": "X-Ray Safety", "timestamp": "1/1/2020", "expires": "" },
      { "name": "X-Ray Safety", "timestamp": "06/01/2021", "expires": "06/01/2022" }
    ]
  },
  {
    "name": "Grace Hopper",
    "completions": [
      { "name": "Laboratory Safety Training", "timestamp": "12/12/2023", "expires": null },
      { "name": "Electrical Safety for Labs", "timestamp": "" }
    ]
  }
]"#;

    fn source() -> PathBuf {
        PathBuf::from("trainings.json")
    }

    #[test]
    fn parse_valid_roster() {
        let roster = parse_roster_str(VALID_JSON, &source()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Ada Lovelace");
        assert_eq!(roster[0].completions.len(), 2);
        assert_eq!(
            roster[0].completions[1].expires,
            NaiveDate::from_ymd_opt(2022, 6, 1)
        );
        assert_eq!(roster[0].completions[0].expires, None);
        assert_eq!(roster[1].completions[0].expires, None);
        assert_eq!(roster[1].completions[1].timestamp, None);
        assert_eq!(roster[1].completions[1].expires, None);
    }

    #[test]
    fn malformed_json_is_unreadable() {
        let err = parse_roster_str("[{ not json", &source()).unwrap_err();
        assert!(matches!(err, TrainingError::SourceUnreadable { .. }));
        assert!(err.is_source_error());
    }

    #[test]
    fn top_level_must_be_array() {
        let err = parse_roster_str(r#"{"name": "Ada"}"#, &source()).unwrap_err();
        assert!(matches!(err, TrainingError::RecordShape { index: 0, .. }));
    }

    #[test]
    fn missing_fields_are_shape_errors() {
        let json = r#"[
            { "name": "Ada", "completions": [] },
            { "name": "Grace" }
        ]"#;
        let err = parse_roster_str(json, &source()).unwrap_err();
        match err {
            TrainingError::RecordShape { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("completions"), "{reason}");
            }
            other => panic!("expected shape error, got {other:?}"),
        }

        let json = r#"[{ "completions": [] }]"#;
        assert!(matches!(
            parse_roster_str(json, &source()).unwrap_err(),
            TrainingError::RecordShape { index: 0, .. }
        ));
    }

    #[test]
    fn completion_without_name_is_shape_error() {
        let json = r#"[{ "name": "Ada", "completions": [{ "timestamp": "01/01/2020" }] }]"#;
        assert!(matches!(
            parse_roster_str(json, &source()).unwrap_err(),
            TrainingError::RecordShape { index: 0, .. }
        ));
    }

    #[test]
    fn wrongly_typed_date_is_shape_error() {
        let json = r#"[
            { "name": "Ada", "completions": [] },
            { "name": "Grace", "completions": [{ "name": "A", "timestamp": 20200101 }] }
        ]"#;
        assert!(matches!(
            parse_roster_str(json, &source()).unwrap_err(),
            TrainingError::RecordShape { index: 1, .. }
        ));
    }

    #[test]
    fn two_digit_year_is_date_error() {
        let json = r#"[{
            "name": "Ada",
            "completions": [{ "name": "X-Ray Safety", "timestamp": "01/01/2020", "expires": "10/15/23" }]
        }]"#;
        match parse_roster_str(json, &source()).unwrap_err() {
            TrainingError::DateFormat { field, source, .. } => {
                assert_eq!(field, "expires");
                assert_eq!(source.value, "10/15/23");
            }
            other => panic!("expected date error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_names_the_record() {
        let json = r#"[{
            "name": "Ada",
            "completions": [{ "name": "X-Ray Safety", "timestamp": "01/01/2020", "expires": "2021-01-01" }]
        }]"#;
        match parse_roster_str(json, &source()).unwrap_err() {
            TrainingError::DateFormat {
                person,
                training,
                field,
                source,
            } => {
                assert_eq!(person, "Ada");
                assert_eq!(training, "X-Ray Safety");
                assert_eq!(field, "expires");
                assert_eq!(source.value, "2021-01-01");
            }
            other => panic!("expected date error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trainings.json");
        std::fs::write(&path, VALID_JSON).unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_roster(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TrainingError::SourceNotFound(_)));
    }

    #[test]
    fn validate_flags_issues() {
        let json = r#"[
            { "name": "Ada", "completions": [{ "name": "A", "timestamp": "" }] },
            { "name": "Ada", "completions": [] }
        ]"#;
        let roster = parse_roster_str(json, &source()).unwrap();
        let warnings = validate_roster(&roster);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("no completions")));
        assert!(warnings.iter().any(|w| w.message.contains("no timestamp")));
    }

    #[test]
    fn validate_clean_roster() {
        let roster = vec![PersonRecord::new(
            "Ada",
            vec![CompletionEntry::new(
                "A",
                NaiveDate::from_ymd_opt(2023, 1, 1),
                None,
            )],
        )];
        assert!(validate_roster(&roster).is_empty());
    }
}
