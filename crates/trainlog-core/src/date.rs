//! Calendar date parsing and fiscal-year ranges.
//!
//! Dates in a roster are plain `MM/DD/YYYY` calendar dates with no time of day
//! and no zone. An empty string means "no date" and becomes `None`.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{DateFormatError, TrainingError};

/// The textual date format used throughout roster files.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse an optional roster date.
///
/// Returns `Ok(None)` for the empty string. Month and day may be written with
/// or without a leading zero; the year always has four digits.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, DateFormatError> {
    if text.is_empty() {
        return Ok(None);
    }
    if !has_date_shape(text) {
        return Err(DateFormatError {
            value: text.to_string(),
        });
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DateFormatError {
            value: text.to_string(),
        })
}

/// `M/D/YYYY` digit groups only. chrono alone also takes short or signed
/// years and embedded spaces.
fn has_date_shape(text: &str) -> bool {
    let mut parts = text.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    digits(month, 1, 2) && digits(day, 1, 2) && digits(year, 4, 4)
}

/// Parse a date that must be present, such as the reference date of an
/// expiration report.
pub fn parse_reference_date(text: &str) -> Result<NaiveDate, DateFormatError> {
    parse_date(text.trim())?.ok_or_else(|| DateFormatError {
        value: text.to_string(),
    })
}

/// Format a date back into roster form (`MM/DD/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Fiscal year `Y`: July 1 of `Y - 1` through June 30 of `Y`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl FiscalYear {
    /// Build the range for fiscal year `year`.
    pub fn new(year: i32) -> Result<Self, TrainingError> {
        let start = year
            .checked_sub(1)
            .and_then(|prev| NaiveDate::from_ymd_opt(prev, 7, 1));
        let end = NaiveDate::from_ymd_opt(year, 6, 30);
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(TrainingError::InvalidFiscalYear(year)),
        }
    }

    /// The calendar year the fiscal year ends in.
    pub fn year(&self) -> i32 {
        self.end.year()
    }

    /// First day of the fiscal year.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the fiscal year.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the fiscal year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FY{} ({} - {})",
            self.year(),
            format_date(self.start),
            format_date(self.end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_padded_and_unpadded() {
        assert_eq!(parse_date("10/01/2023").unwrap(), Some(ymd(2023, 10, 1)));
        assert_eq!(parse_date("6/1/2021").unwrap(), Some(ymd(2021, 6, 1)));
    }

    #[test]
    fn empty_is_no_date() {
        assert_eq!(parse_date("").unwrap(), None);
    }

    #[test]
    fn malformed_dates_are_errors() {
        for bad in ["2023-10-01", "13/01/2023", "02/30/2023", "yesterday"] {
            let err = parse_date(bad).unwrap_err();
            assert_eq!(err.value, bad);
        }
    }

    #[test]
    fn short_signed_or_spaced_dates_are_errors() {
        for bad in [
            "10/01/23",
            "10/01/+2023",
            " 10/01/2023",
            "10/ 1/2023",
            "10/01/2023 ",
            "010/01/2023",
            "10/01/02023",
            "10/01/2023/1",
        ] {
            let err = parse_date(bad).unwrap_err();
            assert_eq!(err.value, bad);
        }
    }

    #[test]
    fn reference_date_rejects_two_digit_year() {
        assert!(parse_reference_date("10/01/23").is_err());
    }

    #[test]
    fn reference_date_is_required() {
        assert!(parse_reference_date("").is_err());
        assert_eq!(
            parse_reference_date(" 10/01/2023\n").unwrap(),
            ymd(2023, 10, 1)
        );
    }

    #[test]
    fn format_round_trips_roster_form() {
        assert_eq!(format_date(ymd(2023, 7, 4)), "07/04/2023");
    }

    #[test]
    fn fiscal_year_bounds() {
        let fy = FiscalYear::new(2024).unwrap();
        assert_eq!(fy.start(), ymd(2023, 7, 1));
        assert_eq!(fy.end(), ymd(2024, 6, 30));
        assert_eq!(fy.year(), 2024);
        assert!(fy.contains(ymd(2023, 7, 1)));
        assert!(fy.contains(ymd(2024, 6, 30)));
        assert!(!fy.contains(ymd(2023, 6, 30)));
        assert!(!fy.contains(ymd(2024, 7, 1)));
        assert_eq!(fy.to_string(), "FY2024 (07/01/2023 - 06/30/2024)");
    }

    #[test]
    fn fiscal_year_out_of_range() {
        assert!(matches!(
            FiscalYear::new(i32::MIN),
            Err(TrainingError::InvalidFiscalYear(_))
        ));
        assert!(FiscalYear::new(i32::MAX).is_err());
    }
}
