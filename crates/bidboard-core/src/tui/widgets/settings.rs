//! Settings tabs: skill sets, freelancer profiles, AI bidding filters, AI bid
//! log, and password change.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AiPane, AppState};
use crate::tui::style::Styles;
use crate::view::ai_bidding::{NOTICE, build_ai_form_view, build_countries_view};
use crate::view::bid_log::{build_bid_log_view, month_tabs};
use crate::view::password::build_password_view;
use crate::view::profiles::{build_editor_view, build_profiles_view};
use crate::view::skillsets::build_skillsets_view;

use super::table::render_table_with_footer;

pub fn render_skillsets(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let vm = build_skillsets_view(&state.skillsets);
    state.skillsets_tab.resolve_selection(vm.rows.len(), true);
    render_table_with_footer(frame, area, &vm, &mut state.skillsets_tab.ratatui_state, true);
}

/// Profile list, or the skill checklist while a profile is being edited.
pub fn render_profiles(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let tab = &mut state.profiles_tab;
    match state.profiles.editor() {
        Some(editor) => {
            let vm = build_editor_view(editor);
            tab.editor.resolve_selection(vm.rows.len(), true);
            render_table_with_footer(frame, area, &vm, &mut tab.editor.ratatui_state, true);
        }
        None => {
            let vm = build_profiles_view(&state.profiles);
            tab.list.resolve_selection(vm.rows.len(), true);
            render_table_with_footer(frame, area, &vm, &mut tab.list.ratatui_state, true);
        }
    }
}

pub fn render_ai_bidding(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).split(area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Notice! ", Styles::warning()),
            Span::styled(NOTICE, Styles::dim()),
        ])),
        rows[0],
    );

    let columns =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(rows[1]);
    let form = build_ai_form_view(&state.ai_bidding);
    let countries = build_countries_view(&state.ai_bidding);
    let tab = &mut state.ai_tab;
    let focus = tab.focus;

    tab.form.resolve_selection(form.rows.len(), focus == AiPane::Form);
    tab.countries
        .resolve_selection(countries.rows.len(), focus == AiPane::Countries);
    render_table_with_footer(
        frame,
        columns[0],
        &form,
        &mut tab.form.ratatui_state,
        focus == AiPane::Form,
    );
    render_table_with_footer(
        frame,
        columns[1],
        &countries,
        &mut tab.countries.ratatui_state,
        focus == AiPane::Countries,
    );
}

pub fn render_bid_log(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).split(area);

    let mut months = vec![Span::raw(" ")];
    for (label, active) in month_tabs(&state.bid_log) {
        let style = if active {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        months.push(Span::styled(format!(" {label} "), style));
        months.push(Span::raw(" "));
    }
    months.push(Span::styled("←/→ month", Styles::dim()));
    frame.render_widget(Paragraph::new(Line::from(months)), rows[0]);

    let vm = build_bid_log_view(&state.bid_log);
    state.bid_log_tab.resolve_selection(vm.rows.len(), true);
    render_table_with_footer(frame, rows[1], &vm, &mut state.bid_log_tab.ratatui_state, true);
}

pub fn render_password(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let vm = build_password_view(&state.password);
    state.password_tab.resolve_selection(vm.rows.len(), true);
    // Rows plus four lines for the header, the borders and the footer.
    let area = Rect {
        height: (vm.rows.len() as u16 + 4).min(area.height),
        ..area
    };
    render_table_with_footer(frame, area, &vm, &mut state.password_tab.ratatui_state, true);
}
