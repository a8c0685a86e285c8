//! Dashboard summary: bid-count series, pass/fail breakdown, status counts.

use crate::model::{Bid, BidStatus};

/// A labelled series of points for a line/bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub points: Vec<u64>,
}

impl ChartSeries {
    pub fn new(title: &'static str, labels: &[&str], points: &[u64]) -> Self {
        Self {
            title,
            labels: labels.iter().map(|s| s.to_string()).collect(),
            points: points.to_vec(),
        }
    }

    /// A series is renderable only when every label has exactly one point.
    pub fn is_valid(&self) -> bool {
        !self.labels.is_empty() && self.labels.len() == self.points.len()
    }

    pub fn total(&self) -> u64 {
        self.points.iter().sum()
    }

    pub fn max(&self) -> u64 {
        self.points.iter().copied().max().unwrap_or(0)
    }

    /// `(label, value)` pairs, for bar charts.
    pub fn bars(&self) -> Vec<(&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.points.iter().copied())
            .collect()
    }
}

/// Total bids per month.
pub fn total_bids_series() -> ChartSeries {
    ChartSeries::new(
        "Total Bids",
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"],
        &[120, 150, 170, 80, 200, 130, 160],
    )
}

/// Bids over the last seven days.
pub fn last_7_days_series() -> ChartSeries {
    ChartSeries::new(
        "Last 7 Days Bids",
        &[
            "Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7",
        ],
        &[10, 20, 15, 30, 25, 35, 40],
    )
}

/// Outcome split of placed bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidStatusBreakdown {
    pub passed: u64,
    pub failed: u64,
}

impl BidStatusBreakdown {
    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }

    /// Share of passed bids, 0 when there are no bids.
    pub fn passed_percent(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.passed as f64 * 100.0 / total as f64,
        }
    }
}

pub fn bid_status_breakdown() -> BidStatusBreakdown {
    BidStatusBreakdown {
        passed: 70,
        failed: 30,
    }
}

/// Active/completed counts over a set of bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub active: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn from_bids<'a, I>(bids: I) -> Self
    where
        I: IntoIterator<Item = &'a Bid>,
    {
        let mut counts = StatusCounts::default();
        for bid in bids {
            match bid.status {
                BidStatus::Active => counts.active += 1,
                BidStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.active + self.completed
    }
}
