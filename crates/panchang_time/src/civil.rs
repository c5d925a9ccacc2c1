//! Civil (proleptic Gregorian) dates as supplied by callers.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Parse an ISO `YYYY-MM-DD` civil date.
pub fn parse_civil_date(input: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| TimeError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Build a civil date from components, rejecting days that do not exist.
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| TimeError::InvalidDate {
        input: format!("{year:04}-{month:02}-{day:02}"),
        reason: "no such calendar day".into(),
    })
}

/// Julian Date (UTC) of 00:00 on a civil date.
pub fn date_to_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let d = parse_civil_date("2025-08-16").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2025, 8, 16));
    }

    #[test]
    fn trims_whitespace() {
        assert!(parse_civil_date(" 2024-01-14\n").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_civil_date("14/01/2024").unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_nonexistent_day() {
        assert!(parse_civil_date("2023-02-29").is_err());
        assert!(civil_date(2023, 2, 29).is_err());
        assert!(civil_date(2024, 2, 29).is_ok());
    }

    #[test]
    fn midnight_jd() {
        let d = civil_date(2000, 1, 1).unwrap();
        assert!((date_to_jd(d) - 2_451_544.5).abs() < 1e-9);
    }
}
