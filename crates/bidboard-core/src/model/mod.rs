//! Bid records.
//!
//! A [`Bid`] keeps its date and amount exactly as the bid service reports them
//! (ISO date string, formatted currency string). Numeric and calendar values
//! are parsed on demand so a malformed field never prevents the record from
//! being shown.

mod seed;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use seed::seed_bids;

/// Lifecycle status of a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Active,
    Completed,
}

impl BidStatus {
    /// Raw field value, used for string comparisons and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Active => "active",
            BidStatus::Completed => "completed",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            BidStatus::Active => "Active",
            BidStatus::Completed => "Completed",
        }
    }
}

/// One freelance-project bid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: u32,
    pub project: String,
    /// ISO 8601 calendar date, e.g. `2025-01-05`.
    pub date: String,
    /// Formatted currency value, e.g. `$500`.
    pub amount: String,
    pub status: BidStatus,
}

impl Bid {
    pub fn new(id: u32, project: &str, date: &str, amount: &str, status: BidStatus) -> Self {
        Self {
            id,
            project: project.to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            status,
        }
    }

    /// Numeric amount, `None` if the amount string is not a number.
    pub fn amount_value(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }

    /// Calendar date, `None` if the date string is not an ISO date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_bid_date(&self.date)
    }
}

/// Parses a formatted currency string into a number.
///
/// Every character other than ASCII digits, `.` and `-` is stripped before
/// parsing, so `"$1,250.50"` becomes `1250.5`. Returns `None` when nothing
/// numeric remains, and also when the rest is only partly numeric: `"1.2.3"`
/// is not read as `1.2`, the whole amount counts as not a number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a bid date. Accepts a plain date or a full ISO datetime (the date
/// part is kept).
pub fn parse_bid_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    raw.get(..10)
        .filter(|_| raw.as_bytes().get(10) == Some(&b'T'))
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
