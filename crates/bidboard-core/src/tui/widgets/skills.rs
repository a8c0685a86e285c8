//! SKILLS tab: included skills (or the priority draft) next to the excluded
//! list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::state::{AppState, SkillsPane};
use crate::view::skills::{build_excluded_view, build_included_view};

use super::table::render_table_with_footer;

pub fn render_skills(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let included = build_included_view(&state.skills);
    let excluded = build_excluded_view(&state.skills);
    state
        .skills_tab
        .resolve_selection(included.rows.len(), excluded.rows.len());

    let columns =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

    let focus = state.skills_tab.focus;
    for (vm, column, pane) in [
        (&included, columns[0], SkillsPane::Included),
        (&excluded, columns[1], SkillsPane::Excluded),
    ] {
        let table_state = match pane {
            SkillsPane::Included => &mut state.skills_tab.included_state,
            SkillsPane::Excluded => &mut state.skills_tab.excluded_state,
        };
        render_table_with_footer(frame, column, vm, table_state, focus == pane);
    }
}
