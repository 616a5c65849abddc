//! # Date Parsing
//!
//! Accepts the three date spellings people actually type when backdating:
//! `2025-08-14`, `08/14/2025`, and `08142025`.

use chrono::{Local, NaiveDate};
use std::fmt;

/// Formats tried in order.
const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m%d%Y"];

/// Header spelling used inside the journal.
pub const HEADER_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date '{}'. Use YYYY-MM-DD, MM/DD/YYYY, or MMDDYYYY.",
            self.input
        )
    }
}

impl std::error::Error for DateParseError {}

/// Parses a user-supplied date. Surrounding whitespace is ignored.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| DateParseError {
            input: s.to_string(),
        })
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_format() {
        assert_eq!(parse_date("2025-08-14").unwrap(), ymd(2025, 8, 14));
    }

    #[test]
    fn test_us_slash_format() {
        assert_eq!(parse_date("08/14/2025").unwrap(), ymd(2025, 8, 14));
    }

    #[test]
    fn test_compact_format() {
        assert_eq!(parse_date("08142025").unwrap(), ymd(2025, 8, 14));
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(parse_date("  2025-01-02\n").unwrap(), ymd(2025, 1, 2));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        for bad in ["", "yesterday", "2025-13-01", "02/30/2025", "14/08/2025"] {
            assert!(parse_date(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_compact_format_needs_eight_digits() {
        assert!(parse_date("8142025").is_err());
    }

    #[test]
    fn test_error_message_names_formats() {
        let err = parse_date("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date 'nope'. Use YYYY-MM-DD, MM/DD/YYYY, or MMDDYYYY."
        );
    }

    #[test]
    fn test_header_format() {
        assert_eq!(ymd(2025, 3, 7).format(HEADER_FORMAT).to_string(), "03/07/2025");
    }
}
