//! AI bid log: daily AI bid counts grouped by month, one month shown at a
//! time.

use chrono::{Datelike, NaiveDate};

use crate::fmt::format_month_label;

/// Bid counts for January 2025, one per day from the 1st.
const SEED_JANUARY: &[u32] = &[28, 48, 54, 26, 11, 4, 48, 59, 60, 44, 39, 13];

/// Months listed before any bids arrive in them.
const SEED_MONTHS: &[(i32, u32)] = &[(2024, 12), (2025, 1), (2025, 2)];

/// AI bids placed on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyBids {
    pub date: NaiveDate,
    pub bids: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLog {
    pub year: i32,
    pub month: u32,
    /// Ascending by date.
    pub days: Vec<DailyBids>,
}

impl MonthLog {
    fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            days: Vec::new(),
        }
    }

    /// `Jan 2025`.
    pub fn label(&self) -> String {
        format_month_label(self.year, self.month)
    }

    pub fn total(&self) -> u32 {
        self.days.iter().map(|d| d.bids).sum()
    }
}

/// Month tabs plus the selected one.
#[derive(Debug, Clone, PartialEq)]
pub struct BidLog {
    /// Ascending by month.
    months: Vec<MonthLog>,
    active: usize,
}

impl Default for BidLog {
    fn default() -> Self {
        Self::new()
    }
}

impl BidLog {
    /// Dec 2024 to Feb 2025 with January logged and selected.
    pub fn new() -> Self {
        let days = SEED_JANUARY.iter().zip(1..).filter_map(|(&bids, day)| {
            NaiveDate::from_ymd_opt(2025, 1, day).map(|date| DailyBids { date, bids })
        });
        let mut log = Self::with_months(SEED_MONTHS, days);
        log.select_label("Jan 2025");
        log
    }

    /// Groups entries by calendar month. `months` are listed even when no
    /// entry falls in them. The latest month is selected.
    pub fn with_months(
        months: &[(i32, u32)],
        entries: impl IntoIterator<Item = DailyBids>,
    ) -> Self {
        let mut log = Self {
            months: months
                .iter()
                .map(|&(year, month)| MonthLog::empty(year, month))
                .collect(),
            active: 0,
        };
        for entry in entries {
            log.record(entry);
        }
        log.active = log.months.len().saturating_sub(1);
        log
    }

    /// Adds a day's count to its month, creating the month if needed. A
    /// second entry for the same day adds to it.
    pub fn record(&mut self, entry: DailyBids) {
        let key = (entry.date.year(), entry.date.month());
        let idx = match self
            .months
            .binary_search_by_key(&key, |m| (m.year, m.month))
        {
            Ok(idx) => idx,
            Err(idx) => {
                self.months.insert(idx, MonthLog::empty(key.0, key.1));
                if idx <= self.active && self.months.len() > 1 {
                    self.active += 1;
                }
                idx
            }
        };

        let days = &mut self.months[idx].days;
        match days.binary_search_by_key(&entry.date, |d| d.date) {
            Ok(pos) => days[pos].bids += entry.bids,
            Err(pos) => days.insert(pos, entry),
        }
    }

    pub fn months(&self) -> &[MonthLog] {
        &self.months
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&MonthLog> {
        self.months.get(self.active)
    }

    /// Selects a month by position. Out-of-range is a no-op.
    pub fn select(&mut self, idx: usize) {
        if idx < self.months.len() {
            self.active = idx;
        }
    }

    /// Selects a month by its label (`Jan 2025`). False if none matches.
    pub fn select_label(&mut self, label: &str) -> bool {
        match self.months.iter().position(|m| m.label() == label) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    pub fn prev_month(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn next_month(&mut self) {
        self.select(self.active + 1);
    }

    /// Bids in the selected month.
    pub fn total(&self) -> u32 {
        self.active().map_or(0, MonthLog::total)
    }
}
