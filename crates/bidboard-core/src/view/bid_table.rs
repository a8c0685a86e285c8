//! Bid list table view model.

use crate::fmt::format_bid_date;
use crate::model::{Bid, BidStatus};
use crate::view::bids::{BidListView, SortDirection, ViewState};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

const HEADERS: &[&str] = &["PROJECT", "DATE", "STATUS", "AMOUNT"];
const WIDTHS: &[u16] = &[24, 20, 11, 10];

/// Message shown instead of the table when no bid passes the filters.
pub const NO_BIDS_FOUND: &str = "No bids found.";

fn status_style(status: BidStatus) -> RowStyleClass {
    match status {
        BidStatus::Active => RowStyleClass::Active,
        BidStatus::Completed => RowStyleClass::Accent,
    }
}

fn bid_row(bid: &Bid) -> ViewRow<u32> {
    let amount = if bid.amount_value().is_some() {
        ViewCell::plain(bid.amount.clone())
    } else {
        ViewCell::styled(bid.amount.clone(), RowStyleClass::Warning)
    };
    ViewRow {
        id: bid.id,
        cells: vec![
            ViewCell::plain(bid.project.clone()),
            ViewCell::plain(format_bid_date(&bid.date)),
            ViewCell::styled(bid.status.label().to_string(), status_style(bid.status)),
            amount,
        ],
        style: RowStyleClass::Normal,
    }
}

/// Builds a UI-agnostic table for the current page of bids.
pub fn build_bids_view(view: &BidListView<'_>, state: &ViewState) -> TableViewModel<u32> {
    let rows: Vec<ViewRow<u32>> = view.rows.iter().map(|b| bid_row(b)).collect();

    let sort_info = match state.sort.key.column() {
        Some(_) => format!(
            ", sort: {} {}",
            state.sort.key.name(),
            state.sort.direction.short_name()
        ),
        None => String::new(),
    };
    let filter_info: String = state
        .filters
        .describe()
        .iter()
        .map(|f| format!(" [{}]", f))
        .collect();

    let title = format!(
        "Bids ({} of {}{}){}",
        view.filtered_count, view.total_count, sort_info, filter_info
    );

    let footer = if view.total_pages > 1 {
        format!("page {}/{}  ←/→ to change", view.page, view.total_pages)
    } else if view.is_empty() {
        NO_BIDS_FOUND.to_string()
    } else {
        String::new()
    };

    TableViewModel {
        title,
        headers: HEADERS.iter().map(|s| s.to_string()).collect(),
        widths: WIDTHS.to_vec(),
        rows,
        sort_column: state.sort.key.column(),
        sort_ascending: state.sort.direction == SortDirection::Ascending,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_bids;
    use crate::view::bids::{Action, BidListViewModel, SortKey, StatusFilter};

    #[test]
    fn table_for_first_page() {
        let vm = BidListViewModel::new(seed_bids());
        let table = build_bids_view(&vm.view(), vm.state());

        assert_eq!(table.title, "Bids (10 of 10)");
        assert_eq!(table.headers, vec!["PROJECT", "DATE", "STATUS", "AMOUNT"]);
        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.sort_column, None);
        assert_eq!(table.footer, "page 1/2  ←/→ to change");

        let first = &table.rows[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.cells[0].text, "Project Alpha");
        assert_eq!(first.cells[1].text, "January 5th, 2025");
        assert_eq!(first.cells[2].text, "Active");
        assert_eq!(first.cells[2].style, Some(RowStyleClass::Active));
        assert_eq!(first.cells[3].text, "$500");
    }

    #[test]
    fn title_reports_sort_and_filters() {
        let mut vm = BidListViewModel::new(seed_bids());
        vm.dispatch(Action::SetStatus(StatusFilter::Completed));
        vm.dispatch(Action::RequestSort(SortKey::Amount));
        vm.dispatch(Action::RequestSort(SortKey::Amount));
        let table = build_bids_view(&vm.view(), vm.state());

        assert_eq!(
            table.title,
            "Bids (5 of 10, sort: amount desc) [status: completed]"
        );
        assert_eq!(table.sort_column, Some(3));
        assert!(!table.sort_ascending);
        assert!(table.footer.is_empty());
        assert_eq!(table.rows[0].cells[3].text, "$950");
    }

    #[test]
    fn empty_view_shows_no_bids_footer() {
        let mut vm = BidListViewModel::new(seed_bids());
        vm.dispatch(Action::SetProjectQuery("nothing".into()));
        let table = build_bids_view(&vm.view(), vm.state());
        assert!(table.rows.is_empty());
        assert_eq!(table.footer, NO_BIDS_FOUND);
    }

    #[test]
    fn malformed_amount_cell_is_flagged() {
        let bids = vec![Bid::new(1, "X", "2025-01-01", "TBD", BidStatus::Completed)];
        let vm = BidListViewModel::new(bids);
        let table = build_bids_view(&vm.view(), vm.state());
        assert_eq!(table.rows[0].cells[3].style, Some(RowStyleClass::Warning));
        assert_eq!(table.rows[0].cells[2].style, Some(RowStyleClass::Accent));
    }
}
