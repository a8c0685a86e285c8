//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::bids::{Action, SortKey};

use super::navigable::NavigableTable;
use crate::settings::{AiField, PasswordField};

use super::state::{AiPane, AppState, FilterField, FormField, InputMode, PopupState, SkillsPane, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Start an auto-bidding toggle request (`b`).
    ToggleAutoBid,
}

/// Navigation action for unified scroll/selection dispatch.
enum NavAction {
    Up,
    Down,
    PageUp(usize),
    PageDown(usize),
    Home,
    End,
}

/// Dispatches a navigation action to the help scroll or the tab selection.
fn dispatch_navigation(state: &mut AppState, action: NavAction) {
    match &mut state.popup {
        PopupState::Help { scroll } => match action {
            NavAction::Up => *scroll = scroll.saturating_sub(1),
            NavAction::Down => *scroll = scroll.saturating_add(1),
            NavAction::PageUp(n) => *scroll = scroll.saturating_sub(n),
            NavAction::PageDown(n) => *scroll = scroll.saturating_add(n),
            NavAction::Home => *scroll = 0,
            NavAction::End => {} // no-op for help
        },
        PopupState::BidDetail { .. } | PopupState::ConfirmDelete { .. } => {}
        _ => {
            let nav: &mut dyn NavigableTable = match state.current_tab {
                Tab::Bids => &mut state.bids_tab,
                Tab::Skills => &mut state.skills_tab,
                Tab::Skillsets => &mut state.skillsets_tab,
                Tab::Profiles if state.profiles.is_editing() => &mut state.profiles_tab.editor,
                Tab::Profiles => &mut state.profiles_tab.list,
                Tab::AiBidding => state.ai_tab.focused_list(),
                Tab::BidLog => &mut state.bid_log_tab,
                Tab::Password => &mut state.password_tab,
            };
            match action {
                NavAction::Up => nav.select_up(),
                NavAction::Down => nav.select_down(),
                NavAction::PageUp(n) => nav.step(-(n as isize)),
                NavAction::PageDown(n) => nav.step(n as isize),
                NavAction::Home => nav.home(),
                NavAction::End => nav.end(),
            }
        }
    }
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    state.status_message = None;

    if matches!(state.popup, PopupState::QuitConfirm) {
        return handle_quit_confirm(state, key);
    }
    if matches!(state.popup, PopupState::ConfirmDelete { .. }) {
        return handle_delete_confirm(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
        InputMode::FilterInput(_) => handle_text_input(state, key, AppState::submit_filter_input),
        InputMode::SkillInput => handle_text_input(state, key, AppState::submit_skill_input),
        InputMode::FormInput(_) => handle_text_input(state, key, AppState::submit_form_input),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_delete_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => state.confirm_delete_skillset(),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => state.popup = PopupState::None,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            return KeyAction::None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }

        // Tab navigation (blocked while a detail popup or an in-tab editor is open)
        KeyCode::Tab | KeyCode::BackTab if state.any_popup_open() => {
            state.status_message = Some("Close popup (Esc) before switching tabs".to_string());
            return KeyAction::None;
        }
        KeyCode::Tab | KeyCode::BackTab if state.open_editor_notice().is_some() => {
            state.status_message = state.open_editor_notice().map(str::to_string);
            return KeyAction::None;
        }
        KeyCode::Tab => {
            state.switch_tab(state.current_tab.next());
            return KeyAction::None;
        }
        KeyCode::BackTab => {
            state.switch_tab(state.current_tab.prev());
            return KeyAction::None;
        }

        // Help
        KeyCode::Char('?') | KeyCode::Char('h') => {
            state.popup = match state.popup {
                PopupState::Help { .. } => PopupState::None,
                _ => PopupState::Help { scroll: 0 },
            };
            return KeyAction::None;
        }

        // Row navigation (or help scroll if help is open)
        KeyCode::Up | KeyCode::Char('k') => {
            dispatch_navigation(state, NavAction::Up);
            return KeyAction::None;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            dispatch_navigation(state, NavAction::Down);
            return KeyAction::None;
        }
        KeyCode::PageUp => {
            dispatch_navigation(state, NavAction::PageUp(10));
            return KeyAction::None;
        }
        KeyCode::PageDown => {
            dispatch_navigation(state, NavAction::PageDown(10));
            return KeyAction::None;
        }
        KeyCode::Home => {
            dispatch_navigation(state, NavAction::Home);
            return KeyAction::None;
        }
        KeyCode::End => {
            dispatch_navigation(state, NavAction::End);
            return KeyAction::None;
        }
        _ => {}
    }

    // Esc closes help/detail popups first.
    if key.code == KeyCode::Esc && state.popup.is_open() {
        state.popup = PopupState::None;
        return KeyAction::None;
    }
    // Detail popup swallows everything else.
    if state.any_popup_open() {
        return KeyAction::None;
    }

    match state.current_tab {
        Tab::Bids => handle_bids_key(state, key),
        Tab::Skills => handle_skills_key(state, key),
        Tab::Skillsets => handle_skillsets_key(state, key),
        Tab::Profiles => handle_profiles_key(state, key),
        Tab::AiBidding => handle_ai_bidding_key(state, key),
        Tab::BidLog => handle_bid_log_key(state, key),
        Tab::Password => handle_password_key(state, key),
    }
}

/// Starts live search on the current tab, keeping its current text.
fn begin_search(state: &mut AppState) {
    state.input = state.search_query();
    state.input_mode = InputMode::Search;
}

/// BIDS tab: filters, sorting, paging, detail, auto-bidding.
fn handle_bids_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Filters
        KeyCode::Char('a') => {
            let next = state.bid_list.state().filters.status.next();
            state.dispatch(Action::SetStatus(next));
        }
        KeyCode::Char('/') => begin_search(state),
        KeyCode::Char('m') => state.begin_filter_input(FilterField::AmountMin),
        KeyCode::Char('M') => state.begin_filter_input(FilterField::AmountMax),
        KeyCode::Char('f') => state.begin_filter_input(FilterField::DateStart),
        KeyCode::Char('t') => state.begin_filter_input(FilterField::DateEnd),
        KeyCode::Char('x') => state.dispatch(Action::ResetFilters),

        // Sorting
        KeyCode::Char(c @ '1'..='4') => {
            let column = c as usize - '1' as usize;
            state.dispatch(Action::RequestSort(SortKey::from_column(column)));
        }
        KeyCode::Char('s') => state.dispatch(Action::CycleSortKey),
        KeyCode::Char('r') => state.dispatch(Action::ToggleSortDirection),

        // Pages
        KeyCode::Left | KeyCode::Char('p') => state.dispatch(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('n') => state.dispatch(Action::NextPage),

        // Detail
        KeyCode::Enter => {
            if let Some(id) = state.selected_bid_id() {
                state.popup = PopupState::BidDetail { id };
            }
        }

        KeyCode::Char('b') => {
            if state.autobid.is_pending() {
                state.status_message = Some("Auto-Bidding update in progress".to_string());
            } else {
                return KeyAction::ToggleAutoBid;
            }
        }
        _ => {}
    }
    KeyAction::None
}

/// SKILLS tab: toggles, exclusions, priority editor.
fn handle_skills_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.skills.is_priority_open() {
        handle_priority_key(state, key);
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Right => {
            state.skills_tab.focus = state.skills_tab.focus.toggled();
        }
        KeyCode::Char(' ') if state.skills_tab.focus == SkillsPane::Included => {
            state.skills.toggle_included(state.skills_tab.included_selected);
        }
        KeyCode::Char('e') => {
            state.input_mode = InputMode::SkillInput;
            state.input.clear();
        }
        KeyCode::Char('d') if state.skills_tab.focus == SkillsPane::Excluded => {
            if let Some(name) = state
                .skills
                .remove_excluded(state.skills_tab.excluded_selected)
            {
                state.status_message = Some(format!("Removed excluded skill: {name}"));
            }
        }
        KeyCode::Char('v') => state.skills.toggle_show_projects(),
        KeyCode::Char('o') => {
            state.skills.open_priority();
            state.skills_tab.focus = SkillsPane::Included;
        }
        _ => {}
    }
    KeyAction::None
}

/// Priority editor: `K`/`J` move the selected skill, `R` resets, Enter saves,
/// Esc cancels.
fn handle_priority_key(state: &mut AppState, key: KeyEvent) {
    let len = state.skills.priority_draft().map_or(0, |d| d.len());
    if len == 0 {
        return;
    }
    let selected = state.skills_tab.included_selected.min(len - 1);

    match key.code {
        KeyCode::Char('K') if selected > 0 => {
            if state.skills.move_priority(selected, selected - 1) {
                state.skills_tab.included_selected = selected - 1;
            }
        }
        KeyCode::Char('J') if selected + 1 < len => {
            if state.skills.move_priority(selected, selected + 1) {
                state.skills_tab.included_selected = selected + 1;
            }
        }
        KeyCode::Char('R') => state.skills.reset_priority(),
        KeyCode::Enter => {
            state.skills.save_priority();
            state.status_message = Some("Skill priorities saved".to_string());
        }
        KeyCode::Esc => state.skills.cancel_priority(),
        _ => {}
    }
}

/// SKILLSETS tab: search, page size, paging, add/edit/delete.
fn handle_skillsets_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('/') => begin_search(state),
        KeyCode::Char('a') => state.begin_skillset_form(state.skillsets.add_draft()),
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(draft) = state
                .selected_skillset_id()
                .and_then(|id| state.skillsets.edit_draft(id))
            {
                state.begin_skillset_form(draft);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = state.selected_skillset_id() {
                state.popup = PopupState::ConfirmDelete { id };
            }
        }
        KeyCode::Char('s') => {
            let next = state.skillsets.show_entries().next();
            state.skillsets.set_show_entries(next);
            state.skillsets_tab.selected = 0;
        }
        KeyCode::Left | KeyCode::Char('p') => {
            state.skillsets.prev_page();
            state.skillsets_tab.selected = 0;
        }
        KeyCode::Right | KeyCode::Char('n') => {
            state.skillsets.next_page();
            state.skillsets_tab.selected = 0;
        }
        _ => {}
    }
    KeyAction::None
}

/// PROFILES tab: search, refresh, and the profile editor.
fn handle_profiles_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.profiles.is_editing() {
        handle_profile_editor_key(state, key);
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('/') => begin_search(state),
        KeyCode::Char('r') => {
            state.status_message = Some(state.profiles.refresh().to_string());
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = state.selected_profile_id() {
                if state.profiles.open_editor(id) {
                    state.profiles_tab.editor.selected = 0;
                }
            }
        }
        _ => {}
    }
    KeyAction::None
}

/// Profile editor: Space toggles a skill, `A`/`U` check or clear all, `t`
/// and `r` edit title and rate, Enter saves, Esc cancels.
fn handle_profile_editor_key(state: &mut AppState, key: KeyEvent) {
    let Some(editor) = state.profiles.editor_mut() else {
        return;
    };
    let idx = state
        .profiles_tab
        .editor
        .selected
        .min(editor.options().len().saturating_sub(1));

    match key.code {
        KeyCode::Char(' ') => editor.toggle_skill(idx),
        KeyCode::Char('A') => editor.check_all(),
        KeyCode::Char('U') => editor.uncheck_all(),
        KeyCode::Char('t') => {
            let title = editor.title.clone();
            state.begin_form_input(FormField::ProfileTitle, &title);
        }
        KeyCode::Char('r') => {
            let rate = editor.hourly_rate.to_string();
            state.begin_form_input(FormField::HourlyRate, &rate);
        }
        KeyCode::Enter => state.save_profile(),
        KeyCode::Esc => state.profiles.cancel_editor(),
        _ => {}
    }
}

/// AI BIDS tab: change filters, toggle countries, save.
fn handle_ai_bidding_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            state.ai_tab.focus = state.ai_tab.focus.toggled();
        }
        KeyCode::Char(' ') | KeyCode::Enter => match state.ai_tab.focus {
            AiPane::Form => {
                let last = AiField::all().len() - 1;
                if let Some(&field) = AiField::all().get(state.ai_tab.form.selected.min(last)) {
                    if !state.ai_bidding.cycle(field) {
                        let current = state.ai_bidding.value(field);
                        state.begin_form_input(FormField::AiNumber(field), &current);
                    }
                }
            }
            AiPane::Countries => state.ai_bidding.toggle_country(state.ai_tab.countries.selected),
        },
        KeyCode::Char('s') => {
            state.status_message = Some(state.ai_bidding.save().to_string());
        }
        _ => {}
    }
    KeyAction::None
}

/// BID LOG tab: month selection.
fn handle_bid_log_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Left | KeyCode::Char('p') => {
            state.bid_log.prev_month();
            state.bid_log_tab.selected = 0;
        }
        KeyCode::Right | KeyCode::Char('n') => {
            state.bid_log.next_month();
            state.bid_log_tab.selected = 0;
        }
        _ => {}
    }
    KeyAction::None
}

/// PASSWORD tab: edit a field, submit the form.
fn handle_password_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => {
            let last = PasswordField::all().len() - 1;
            if let Some(&field) = PasswordField::all().get(state.password_tab.selected.min(last)) {
                state.begin_form_input(FormField::Password(field), "");
            }
        }
        KeyCode::Char('s') => state.submit_password(),
        _ => {}
    }
    KeyAction::None
}

/// Live search: every edit is applied immediately.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel search
            state.close_input();
            state.set_search_query(String::new());
        }
        KeyCode::Enter => {
            // Query is already applied, just switch mode
            state.input_mode = InputMode::Normal;
            state.input.clear();
        }
        KeyCode::Backspace => {
            state.input.pop();
            state.set_search_query(state.input.clone());
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return if c == 'c' {
                    KeyAction::Quit
                } else {
                    KeyAction::None
                };
            }
            state.input.push(c);
            state.set_search_query(state.input.clone());
        }
        _ => {}
    }
    KeyAction::None
}

/// Popup text input, committed with `submit` on Enter.
fn handle_text_input(state: &mut AppState, key: KeyEvent, submit: fn(&mut AppState)) -> KeyAction {
    match key.code {
        KeyCode::Esc => state.close_input(),
        KeyCode::Enter => submit(state),
        KeyCode::Backspace => {
            state.input.pop();
            state.input_error = None;
        }
        KeyCode::Char(c) => {
            // Ignore control/alt-modified chars
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return KeyAction::None;
            }
            state.input.push(c);
            state.input_error = None;
        }
        _ => {}
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_bids;
    use crate::view::bids::{AmountBound, SortDirection, StatusFilter, ViewState};
    use chrono::NaiveDate;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let _ = handle_key(state, key(KeyCode::Char(c)));
        }
    }

    fn new_state() -> AppState {
        AppState::new(
            seed_bids(),
            Duration::from_millis(10),
            NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
        )
    }

    #[test]
    fn tab_switches_between_bids_and_skills() {
        let mut state = new_state();
        assert_eq!(state.current_tab, Tab::Bids);
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Skills);
        let _ = handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Bids);
    }

    #[test]
    fn quit_goes_through_confirmation() {
        let mut state = new_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Quit);

        let mut state = new_state();
        assert_eq!(handle_key(&mut state, ctrl('c')), KeyAction::Quit);
    }

    #[test]
    fn status_key_cycles_filter() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.bid_list.state().filters.status, StatusFilter::Active);
        assert_eq!(state.bid_list.view().filtered_count, 5);

        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.bid_list.state().filters.status, StatusFilter::All);
    }

    #[test]
    fn search_applies_live_and_esc_clears() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        assert_eq!(state.input_mode, InputMode::Search);

        type_str(&mut state, "ALP");
        assert_eq!(state.bid_list.state().filters.project_query, "ALP");
        assert_eq!(state.bid_list.view().filtered_count, 1);

        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.bid_list.state().filters.project_query, "AL");

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.bid_list.state().filters.project_query, "");
        assert_eq!(state.bid_list.view().filtered_count, 10);
    }

    #[test]
    fn search_keys_do_not_trigger_commands() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        type_str(&mut state, "qa");
        assert_eq!(state.popup, PopupState::None);
        assert_eq!(state.bid_list.state().filters.status, StatusFilter::All);

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.bid_list.state().filters.project_query, "qa");
    }

    #[test]
    fn amount_popup_parses_on_enter() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('m')));
        assert_eq!(
            state.input_mode,
            InputMode::FilterInput(FilterField::AmountMin)
        );
        type_str(&mut state, "600");
        assert_eq!(state.bid_list.state().filters.amount_min, None);

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        let _ = handle_key(&mut state, key(KeyCode::Char('M')));
        type_str(&mut state, "800");
        let _ = handle_key(&mut state, key(KeyCode::Enter));

        let filters = &state.bid_list.state().filters;
        assert_eq!(filters.amount_min, Some(AmountBound::Value(600.0)));
        assert_eq!(filters.amount_max, Some(AmountBound::Value(800.0)));
        assert_eq!(state.bid_list.view().filtered_count, 5);
    }

    #[test]
    fn date_popup_error_then_fix() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('f')));
        type_str(&mut state, "nope");
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.input_error.is_some());
        assert_eq!(
            state.input_mode,
            InputMode::FilterInput(FilterField::DateStart)
        );

        for _ in 0..4 {
            let _ = handle_key(&mut state, key(KeyCode::Backspace));
        }
        assert!(state.input_error.is_none());
        type_str(&mut state, "2025-01-10");
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(
            state.bid_list.state().filters.date_start,
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
    }

    #[test]
    fn column_keys_request_sort() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('4')));
        let sort = state.bid_list.state().sort;
        assert_eq!(sort.key, SortKey::Amount);
        assert_eq!(sort.direction, SortDirection::Ascending);

        let _ = handle_key(&mut state, key(KeyCode::Char('4')));
        assert_eq!(
            state.bid_list.state().sort.direction,
            SortDirection::Descending
        );
        let view = state.bid_list.view();
        assert_eq!(view.rows[0].amount, "$950");

        let _ = handle_key(&mut state, key(KeyCode::Char('1')));
        assert_eq!(state.bid_list.state().sort.key, SortKey::Project);
        assert_eq!(
            state.bid_list.state().sort.direction,
            SortDirection::Ascending
        );
    }

    #[test]
    fn page_keys_stay_in_range() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.bid_list.state().page, 1);
        let _ = handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.bid_list.state().page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.bid_list.state().page, 2);
        let _ = handle_key(&mut state, key(KeyCode::Char('p')));
        assert_eq!(state.bid_list.state().page, 1);
    }

    #[test]
    fn enter_opens_detail_and_blocks_tab_switch() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.popup, PopupState::BidDetail { id: 2 });

        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Bids);
        assert!(state.status_message.is_some());

        // Bid keys are swallowed while the popup is open.
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.bid_list.state().filters.status, StatusFilter::All);

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn reset_key_restores_defaults() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        let _ = handle_key(&mut state, key(KeyCode::Char('3')));
        let _ = handle_key(&mut state, key(KeyCode::Char('x')));
        assert_eq!(state.bid_list.state(), &ViewState::default());
    }

    #[test]
    fn autobid_key_requests_toggle_once() {
        let mut state = new_state();
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('b'))),
            KeyAction::ToggleAutoBid
        );
        state.autobid.request_toggle();
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('b'))),
            KeyAction::None
        );
        assert!(state.status_message.is_some());
    }

    #[test]
    fn help_toggles_and_scrolls() {
        let mut state = new_state();
        let _ = handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });
        let _ = handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
        assert_eq!(state.bids_tab.selected, 0);
        let _ = handle_key(&mut state, key(KeyCode::Char('h')));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn skills_toggle_and_exclusions() {
        let mut state = new_state();
        state.current_tab = Tab::Skills;

        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.skills.included()[1].active);

        let _ = handle_key(&mut state, key(KeyCode::Char('e')));
        assert_eq!(state.input_mode, InputMode::SkillInput);
        type_str(&mut state, "Perl");
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(
            state.skills.excluded().last().map(String::as_str),
            Some("Perl")
        );

        // `d` only acts on the excluded list.
        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.skills.excluded().len(), 8);
        let _ = handle_key(&mut state, key(KeyCode::Right));
        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.skills.excluded().len(), 7);
        assert!(!state.skills.excluded().iter().any(|s| s == "Perl"));

        let _ = handle_key(&mut state, key(KeyCode::Char('v')));
        assert!(state.skills.show_projects());
    }

    #[test]
    fn priority_editor_moves_and_saves() {
        let mut state = new_state();
        state.current_tab = Tab::Skills;
        let _ = handle_key(&mut state, key(KeyCode::Char('o')));
        assert!(state.skills.is_priority_open());

        let _ = handle_key(&mut state, key(KeyCode::Char('J')));
        assert_eq!(state.skills_tab.included_selected, 1);
        let draft = state.skills.priority_draft().unwrap();
        assert_eq!(draft[1].name, "API Development");

        // Tab switching is blocked while editing.
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Skills);

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.skills.is_priority_open());
        assert_eq!(state.skills.included()[0].name, "API Integration");
    }

    #[test]
    fn priority_editor_cancel_and_reset() {
        let mut state = new_state();
        state.current_tab = Tab::Skills;
        let _ = handle_key(&mut state, key(KeyCode::Char('o')));
        let _ = handle_key(&mut state, key(KeyCode::Char('K')));
        // Already at the top: nothing moves.
        assert_eq!(state.skills_tab.included_selected, 0);

        let _ = handle_key(&mut state, key(KeyCode::Char('J')));
        let _ = handle_key(&mut state, key(KeyCode::Char('R')));
        let draft = state.skills.priority_draft().unwrap();
        assert_eq!(draft[0].name, "API Development");

        let _ = handle_key(&mut state, key(KeyCode::Char('J')));
        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.skills.is_priority_open());
        assert_eq!(state.skills.included()[0].name, "API Development");
    }

    #[test]
    fn tab_cycles_through_settings_tabs() {
        let mut state = new_state();
        for expected in &Tab::all()[1..] {
            let _ = handle_key(&mut state, key(KeyCode::Tab));
            assert_eq!(state.current_tab, *expected);
        }
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Bids);
        let _ = handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Password);
    }

    #[test]
    fn skillsets_search_and_page_size() {
        let mut state = new_state();
        state.current_tab = Tab::Skillsets;
        let _ = handle_key(&mut state, key(KeyCode::Char('/')));
        type_str(&mut state, "word");
        assert_eq!(state.skillsets.search(), "word");
        assert_eq!(state.skillsets.filtered().len(), 1);
        // Bid search is untouched.
        assert_eq!(state.bid_list.state().filters.project_query, "");

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.skillsets.search(), "");

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.skillsets.show_entries().count(), 20);
    }

    #[test]
    fn skillset_add_edit_delete() {
        let mut state = new_state();
        state.current_tab = Tab::Skillsets;

        let _ = handle_key(&mut state, key(KeyCode::Char('a')));
        assert_eq!(state.input_mode, InputMode::FormInput(FormField::SkillsetName));
        type_str(&mut state, "Rust");
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.skillsets.get(11).map(|s| s.skills.as_str()), Some("No skills listed"));

        let _ = handle_key(&mut state, key(KeyCode::Home));
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.input, "API");
        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.skillset_draft.is_none());

        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.popup, PopupState::ConfirmDelete { id: 1 });
        // Tab keys do nothing until the dialog is answered.
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Skillsets);
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert!(state.skillsets.get(1).is_some());

        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        let _ = handle_key(&mut state, key(KeyCode::Char('y')));
        assert!(state.skillsets.get(1).is_none());
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn profile_editor_blocks_tabs_until_saved() {
        let mut state = new_state();
        state.current_tab = Tab::Profiles;
        let _ = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Success! Profiles refreshed successfully.")
        );

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.profiles.is_editing());
        let _ = handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Profiles);

        let _ = handle_key(&mut state, key(KeyCode::Char('U')));
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Char(' ')));
        let _ = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(state.input_mode, InputMode::FormInput(FormField::HourlyRate));
        assert_eq!(state.input, "30");
        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        type_str(&mut state, "55");
        let _ = handle_key(&mut state, key(KeyCode::Enter));

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.profiles.is_editing());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Profile updated: CMS Developer, Skills: CMS")
        );
        assert_eq!(state.profiles.profiles()[0].hourly_rate, 55);
    }

    #[test]
    fn ai_bidding_cycles_and_edits_numbers() {
        let mut state = new_state();
        state.current_tab = Tab::AiBidding;
        let _ = handle_key(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.ai_bidding.value(AiField::PaymentVerified), "Required");

        for _ in 0..4 {
            let _ = handle_key(&mut state, key(KeyCode::Down));
        }
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(
            state.input_mode,
            InputMode::FormInput(FormField::AiNumber(AiField::MinProjects))
        );
        let _ = handle_key(&mut state, key(KeyCode::Backspace));
        type_str(&mut state, "12");
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.ai_bidding.min_projects, 12);

        let _ = handle_key(&mut state, key(KeyCode::Right));
        let _ = handle_key(&mut state, key(KeyCode::Down));
        let _ = handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.ai_bidding.countries()[1].active);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.status_message.as_deref(), Some("AI Bids Settings saved!"));
    }

    #[test]
    fn bid_log_switches_months() {
        let mut state = new_state();
        state.current_tab = Tab::BidLog;
        assert_eq!(state.bid_log.total(), 434);
        let _ = handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.bid_log.active().map(|m| m.label()), Some("Dec 2024".to_string()));
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        assert_eq!(state.bid_log.active_index(), 2);
    }

    #[test]
    fn password_fields_then_submit() {
        let mut state = new_state();
        state.current_tab = Tab::Password;
        for value in ["old", "new1", "new2"] {
            let _ = handle_key(&mut state, key(KeyCode::Enter));
            type_str(&mut state, value);
            let _ = handle_key(&mut state, key(KeyCode::Enter));
            let _ = handle_key(&mut state, key(KeyCode::Down));
        }
        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(
            state.status_message.as_deref(),
            Some("New password and confirm password do not match.")
        );

        let _ = handle_key(&mut state, key(KeyCode::Enter));
        type_str(&mut state, "new1");
        let _ = handle_key(&mut state, key(KeyCode::Enter));
        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Password changed successfully!")
        );
        assert_eq!(state.password.value(PasswordField::Old), "");
    }
}

