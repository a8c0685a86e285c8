//! Parsers for filter input typed by the user.
//!
//! Dates accept several forms:
//! - Calendar date: `2025-01-05`
//! - ISO 8601 datetime: `2025-01-05T10:30:00` (time part dropped)
//! - `today`
//! - Relative: `-7d`, `-2w` (days/weeks before the base date)

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

use crate::model::parse_amount;
use crate::view::bids::AmountBound;

/// Error type for date parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
    pub message: String,
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse date '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for DateParseError {}

/// Parses a date expression, resolving `today` and relative forms against
/// `base`.
///
/// | Format | Example | Description |
/// |--------|---------|-------------|
/// | Date | `2025-01-05` | Calendar date |
/// | ISO 8601 | `2025-01-05T10:30:00` | Date part of a datetime |
/// | Today | `today` | The base date |
/// | Relative | `-7d`, `-2w` | Days/weeks before base |
pub fn parse_date(input: &str, base: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("today") {
        return Ok(base);
    }

    if let Some(days) = try_parse_relative_days(input) {
        return Duration::try_days(days)
            .and_then(|offset| base.checked_sub_signed(offset))
            .ok_or_else(|| DateParseError {
                input: input.to_string(),
                message: "Relative date out of range".to_string(),
            });
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Some(date) = try_parse_iso8601(input) {
        return Ok(date);
    }

    Err(DateParseError {
        input: input.to_string(),
        message: "Unrecognized format. Use: date (2025-01-05), \
                  ISO 8601 (2025-01-05T10:30:00), today, or relative (-7d, -2w)"
            .to_string(),
    })
}

/// Parses `-Nd` / `-Nw` into a number of days.
fn try_parse_relative_days(input: &str) -> Option<i64> {
    let rest = input.strip_prefix('-')?;
    let unit = rest.chars().last()?;
    let number_str = &rest[..rest.len() - unit.len_utf8()];
    if number_str.is_empty() {
        return None;
    }
    let number: i64 = number_str.parse().ok()?;

    match unit {
        'd' => Some(number),
        'w' => number.checked_mul(7),
        _ => None,
    }
}

fn try_parse_iso8601(input: &str) -> Option<NaiveDate> {
    if !input.contains('T') {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(ndt.date());
        }
    }

    None
}

/// Parses one side of the amount range.
///
/// Empty input clears the bound. A number, optionally with a leading `$` and
/// thousands separators, becomes [`AmountBound::Value`]; anything else is
/// kept as [`AmountBound::Malformed`] so the filter matches nothing.
pub fn parse_amount_bound(input: &str) -> Option<AmountBound> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let digits = input.strip_prefix('$').unwrap_or(input).replace(',', "");
    let looks_numeric = !digits.is_empty()
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-');

    match parse_amount(&digits) {
        Some(value) if looks_numeric => Some(AmountBound::Value(value)),
        _ => Some(AmountBound::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(parse_date("2025-01-05", base()).unwrap(), date(2025, 1, 5));
        assert_eq!(parse_date("  2024-12-31 ", base()).unwrap(), date(2024, 12, 31));
    }

    #[test]
    fn test_iso8601_drops_time() {
        assert_eq!(
            parse_date("2025-01-05T23:59:00", base()).unwrap(),
            date(2025, 1, 5)
        );
        assert_eq!(
            parse_date("2025-01-05T10:30", base()).unwrap(),
            date(2025, 1, 5)
        );
        assert_eq!(
            parse_date("2025-01-05T10:30:00Z", base()).unwrap(),
            date(2025, 1, 5)
        );
    }

    #[test]
    fn test_today_and_relative() {
        assert_eq!(parse_date("today", base()).unwrap(), base());
        assert_eq!(parse_date("Today", base()).unwrap(), base());
        assert_eq!(parse_date("-7d", base()).unwrap(), date(2025, 1, 7));
        assert_eq!(parse_date("-2w", base()).unwrap(), date(2024, 12, 31));
        assert_eq!(parse_date("-0d", base()).unwrap(), base());
    }

    #[test]
    fn test_relative_out_of_range() {
        for input in ["-200000000000000d", "-200000000000000w", "-9223372036854775807d"] {
            let err = parse_date(input, base()).unwrap_err();
            assert_eq!(err.message, "Relative date out of range");
        }
        // Fits in a Duration but not in a NaiveDate.
        let err = parse_date("-100000000d", base()).unwrap_err();
        assert_eq!(err.message, "Relative date out of range");
    }

    #[test]
    fn test_invalid_formats() {
        assert!(parse_date("", base()).is_err());
        assert!(parse_date("invalid", base()).is_err());
        assert!(parse_date("2025-13-01", base()).is_err());
        assert!(parse_date("-d", base()).is_err());
        assert!(parse_date("-3h", base()).is_err());
        assert!(parse_date("01/05/2025", base()).is_err());

        let err = parse_date("soon", base()).unwrap_err();
        assert_eq!(err.input, "soon");
        assert!(err.to_string().starts_with("Failed to parse date 'soon'"));
    }

    #[test]
    fn test_amount_bound() {
        assert_eq!(parse_amount_bound(""), None);
        assert_eq!(parse_amount_bound("   "), None);
        assert_eq!(parse_amount_bound("600"), Some(AmountBound::Value(600.0)));
        assert_eq!(parse_amount_bound("$600"), Some(AmountBound::Value(600.0)));
        assert_eq!(
            parse_amount_bound("$1,250.50"),
            Some(AmountBound::Value(1250.5))
        );
        assert_eq!(parse_amount_bound("abc"), Some(AmountBound::Malformed));
        assert_eq!(parse_amount_bound("12abc"), Some(AmountBound::Malformed));
        assert_eq!(parse_amount_bound("$"), Some(AmountBound::Malformed));
    }
}
