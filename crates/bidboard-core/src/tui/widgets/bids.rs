//! BIDS tab: dashboard panels and the paginated bid table.
//! The table is a thin wrapper over [`crate::view::bid_table::build_bids_view`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Clear, Paragraph};

use crate::fmt::format_percent;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::bid_table::build_bids_view;
use crate::view::bids::apply_filters;
use crate::view::summary::{
    ChartSeries, StatusCounts, bid_status_breakdown, last_7_days_series, total_bids_series,
};

use super::table::build_table;

/// Below this width the dashboard panels are hidden and only the table shows.
const MIN_DASHBOARD_WIDTH: u16 = 80;
const DASHBOARD_HEIGHT: u16 = 10;

pub fn render_bids(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let table_area = if state.terminal_width >= MIN_DASHBOARD_WIDTH
        && area.height > DASHBOARD_HEIGHT + 5
    {
        let chunks =
            Layout::vertical([Constraint::Length(DASHBOARD_HEIGHT), Constraint::Min(5)]).split(area);
        render_dashboard(frame, chunks[0], state);
        chunks[1]
    } else {
        area
    };

    render_bid_table(frame, table_area, state);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(34),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    render_overview(frame, chunks[0], state);
    render_series(frame, chunks[1], &total_bids_series(), 3);
    render_series(frame, chunks[2], &last_7_days_series(), 5);
}

/// Auto-bidding switch, status counts, and pass/fail split.
fn render_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let (auto_text, auto_style) = if state.autobid.is_pending() {
        ("updating...", Styles::warning())
    } else if state.autobid.is_enabled() {
        ("ON", Styles::on())
    } else {
        ("OFF", Styles::off())
    };

    let counts = StatusCounts::from_bids(state.bid_list.bids());
    let filters = &state.bid_list.state().filters;
    let shown = StatusCounts::from_bids(apply_filters(state.bid_list.bids(), filters));
    let breakdown = bid_status_breakdown();

    let lines = vec![
        Line::from(vec![
            Span::styled("Auto-Bidding: ", Styles::section_header()),
            Span::styled(auto_text, auto_style),
        ]),
        Line::from(vec![
            Span::styled("b", Styles::key()),
            Span::styled(" toggle", Styles::dim()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Bids", Styles::section_header())),
        Line::from(format!(
            "  active {:<4} completed {}",
            counts.active, counts.completed
        )),
        if filters.is_active() {
            Line::from(Span::styled(
                format!("  shown  {:<4}           {}", shown.active, shown.completed),
                Styles::dim(),
            ))
        } else {
            Line::from("")
        },
        Line::from(Span::styled("Bid Status", Styles::section_header())),
        Line::from(vec![
            Span::styled(
                format!("  passed {}", format_percent(breakdown.passed_percent())),
                Styles::on(),
            ),
            Span::styled(format!("  failed {}", breakdown.failed), Styles::off()),
        ]),
    ];

    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .style(Styles::default());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_series(frame: &mut Frame, area: Rect, series: &ChartSeries, bar_width: u16) {
    let block = Block::default()
        .title(format!(" {} ({}) ", series.title, series.total()))
        .borders(Borders::ALL)
        .style(Styles::default());

    if !series.is_valid() {
        frame.render_widget(
            Paragraph::new("Invalid chart data").style(Styles::warning()).block(block),
            area,
        );
        return;
    }

    let bars = series.bars();
    let chart = BarChart::default()
        .block(block)
        .data(bars.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Styles::chart())
        .value_style(Styles::header())
        .label_style(Styles::dim())
        .max(series.max());
    frame.render_widget(chart, area);
}

fn render_bid_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let vm = {
        let view = state.bid_list.view();
        build_bids_view(&view, state.bid_list.state())
    };

    // Resolve selection
    let row_ids: Vec<u32> = vm.rows.iter().map(|r| r.id).collect();
    state.bids_tab.resolve_selection(&row_ids);

    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let table = build_table(&vm, true);
    frame.render_widget(Clear, chunks[0]);
    frame.render_stateful_widget(table, chunks[0], &mut state.bids_tab.ratatui_state);

    let footer_style = if vm.rows.is_empty() {
        Styles::warning()
    } else {
        Styles::dim()
    };
    frame.render_widget(
        Paragraph::new(format!(" {}", vm.footer)).style(footer_style),
        chunks[1],
    );
}
