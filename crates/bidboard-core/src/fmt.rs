//! Shared formatting helpers for view models and the TUI.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English ordinal suffix for a day of month: `st`, `nd`, `rd`, `th`.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Long date form: `January 5th, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!(
        "{} {}{}, {}",
        month,
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Day heading in the bid log: `Wednesday, 1st January`.
pub fn format_log_day(date: NaiveDate) -> String {
    format!(
        "{}, {}{} {}",
        date.format("%A"),
        date.day(),
        ordinal_suffix(date.day()),
        MONTHS[date.month0() as usize]
    )
}

/// Short month label: `Jan 2025`.
pub fn format_month_label(year: i32, month: u32) -> String {
    let name = MONTHS.get(month.wrapping_sub(1) as usize).map_or("???", |m| &m[..3]);
    format!("{name} {year}")
}

/// Formats a bid date string for display, falling back to the raw text when
/// it does not parse.
pub fn format_bid_date(raw: &str) -> String {
    crate::model::parse_bid_date(raw)
        .map(format_long_date)
        .unwrap_or_else(|| raw.to_string())
}

/// Formats a currency amount: `$1,250`, `$99.50`, `-$20`.
pub fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let cents = (abs * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac:02}")
    }
}

/// Percentage with one decimal: `70.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
