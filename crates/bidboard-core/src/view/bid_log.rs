//! AI monthly log: month tabs and the selected month's daily counts.

use crate::fmt::format_log_day;
use crate::settings::BidLog;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

/// Month labels with the selected one flagged.
pub fn month_tabs(log: &BidLog) -> Vec<(String, bool)> {
    log.months()
        .iter()
        .enumerate()
        .map(|(i, m)| (m.label(), i == log.active_index()))
        .collect()
}

pub fn build_bid_log_view(log: &BidLog) -> TableViewModel<usize> {
    let (label, rows) = match log.active() {
        Some(month) => (
            month.label(),
            month
                .days
                .iter()
                .enumerate()
                .map(|(i, day)| ViewRow {
                    id: i,
                    cells: vec![
                        ViewCell::plain(format_log_day(day.date)),
                        ViewCell::styled(day.bids.to_string(), RowStyleClass::Accent),
                    ],
                    style: RowStyleClass::Normal,
                })
                .collect::<Vec<_>>(),
        ),
        None => (String::new(), Vec::new()),
    };

    let footer = if rows.is_empty() {
        format!("No AI bids logged in {label}")
    } else {
        format!("TOTAL BIDS: {}", log.total())
    };

    TableViewModel {
        title: format!("AI Monthly Log · {label}"),
        headers: vec!["DATE".into(), "BIDS".into()],
        widths: vec![28],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer,
    }
}
