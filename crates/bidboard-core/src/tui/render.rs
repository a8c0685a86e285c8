//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{AppState, InputMode, PopupState, Tab};
use super::widgets::{
    render_ai_bidding, render_bid_detail, render_bid_log, render_bids, render_confirm_delete,
    render_header, render_help, render_input_popup, render_password, render_profiles,
    render_quit_confirm, render_skills, render_skillsets,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, content
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Content area
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);

    // Popups (rendered last to overlay everything).
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, state.current_tab, scroll),
        PopupState::BidDetail { id } => {
            if let Some(bid) = state.bid_list.bid(*id) {
                render_bid_detail(frame, area, bid);
            }
        }
        PopupState::QuitConfirm => render_quit_confirm(frame, area, state.autobid.is_pending()),
        PopupState::ConfirmDelete { id } => {
            if let Some(set) = state.skillsets.get(*id) {
                render_confirm_delete(frame, area, &set.name);
            }
        }
    }

    // Input popups are not part of PopupState since they are an InputMode
    if matches!(state.popup, PopupState::QuitConfirm) {
        return;
    }
    match state.input_mode {
        InputMode::FilterInput(field) => render_input_popup(
            frame,
            area,
            field.title(),
            &state.input,
            field.examples(),
            state.input_error.as_deref(),
        ),
        InputMode::SkillInput => render_input_popup(
            frame,
            area,
            "Add excluded skill",
            &state.input,
            &[],
            None,
        ),
        InputMode::FormInput(field) => {
            let shown = if field.is_secret() {
                "•".repeat(state.input.chars().count())
            } else {
                state.input.clone()
            };
            render_input_popup(
                frame,
                area,
                field.title(),
                &shown,
                field.examples(),
                state.input_error.as_deref(),
            );
        }
        InputMode::Normal | InputMode::Search => {}
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.current_tab {
        Tab::Bids => render_bids(frame, area, state),
        Tab::Skills => render_skills(frame, area, state),
        Tab::Skillsets => render_skillsets(frame, area, state),
        Tab::Profiles => render_profiles(frame, area, state),
        Tab::AiBidding => render_ai_bidding(frame, area, state),
        Tab::BidLog => render_bid_log(frame, area, state),
        Tab::Password => render_password(frame, area, state),
    }
}
