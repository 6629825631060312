//! Calendar helpers for the `dd/mm/yyyy` format used across the UI and the
//! stored document dates.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Display and input format for every user-facing date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid dd/mm/yyyy date")]
pub struct DateParseError {
    pub input: String,
}

/// Parse a `dd/mm/yyyy` string.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| DateParseError {
        input: input.to_string(),
    })
}

/// Parse an optional deadline field: empty means "no deadline".
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>, DateParseError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A calendar month, `month` in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    /// Build from a month/year pair; `None` when the month is out of range.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { month, year })
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the month (handles leap years and December).
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("25/12/2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
        );
        assert!(parse_date("32/13/2025").is_err());
        assert!(parse_date("2025-12-25").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert!(parse_optional_date(Some("31/02/2025")).is_err());
        assert_eq!(
            parse_optional_date(Some("01/01/2026")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 1)
        );
    }

    #[test]
    fn test_month_bounds() {
        let feb = MonthYear::new(2, 2024).unwrap();
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec = MonthYear::new(12, 2025).unwrap();
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        assert!(MonthYear::new(13, 2025).is_none());
        assert!(MonthYear::new(0, 2025).is_none());
    }

    #[test]
    fn test_month_contains() {
        let m = MonthYear::new(11, 2025).unwrap();
        assert!(m.contains(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()));
    }
}
