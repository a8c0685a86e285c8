//! Header widget showing date, auto-bidding state, tabs, and input/status.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::fmt::format_long_date;
use crate::tui::state::{AppState, InputMode, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let tabs_width: usize = Tab::all().iter().map(|t| t.name().len() + 2).sum();
    let chunks = Layout::horizontal([
        Constraint::Length(22),               // Date
        Constraint::Length(14),               // Auto-bidding
        Constraint::Length(tabs_width as u16), // Tabs
        Constraint::Min(20),                  // Search/Filters/Status
    ])
    .split(area);

    let date = Paragraph::new(format!(" {}", format_long_date(state.today))).style(Styles::header());
    frame.render_widget(date, chunks[0]);

    let (auto_text, auto_style) = if state.autobid.is_pending() {
        (" AUTO: ... ", Styles::header())
    } else if state.autobid.is_enabled() {
        (" AUTO: ON ", Styles::header().patch(Styles::on()))
    } else {
        (" AUTO: OFF ", Styles::header())
    };
    frame.render_widget(Paragraph::new(auto_text).style(auto_style), chunks[1]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .map(|tab| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            Span::styled(format!(" {} ", tab.name()), style)
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header());
    frame.render_widget(tabs_widget, chunks[2]);

    // Search input, status message, or active filters
    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::header().patch(Styles::warning()))
    } else {
        match state.input_mode {
            InputMode::Search => (format!("Search: {}█", state.input), Styles::search_input()),
            InputMode::SkillInput | InputMode::FilterInput(_) | InputMode::FormInput(_) => {
                (String::new(), Styles::header())
            }
            InputMode::Normal => {
                let filters = &state.bid_list.state().filters;
                let text = if state.current_tab == Tab::Bids && filters.is_active() {
                    format!("filters: {}", filters.describe().join(", "))
                } else {
                    String::new()
                };
                (text, Styles::header())
            }
        }
    };
    frame.render_widget(Paragraph::new(right_content).style(right_style), chunks[3]);
}
