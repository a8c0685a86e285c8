//! Per-tab selection state: BIDS (current page rows), SKILLS (included and
//! excluded lists), and the single- or two-list settings tabs.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::tui::navigable::NavigableTable;

// ===========================================================================
// BIDS tab state
// ===========================================================================

/// Selection on the current page of the bid table.
#[derive(Debug, Default)]
pub struct BidsTabState {
    pub selected: usize,
    /// Bid ID under the cursor; keeps the selection on the same bid when
    /// rows are re-sorted or filtered.
    pub tracked_id: Option<u32>,
    pub ratatui_state: RatatuiTableState,
}

impl BidsTabState {
    /// Resolves selection against the visible rows: applies the tracked ID,
    /// clamps the selected index, and syncs ratatui state.
    pub fn resolve_selection(&mut self, row_ids: &[u32]) {
        if let Some(tracked) = self.tracked_id {
            if let Some(idx) = row_ids.iter().position(|&id| id == tracked) {
                self.selected = idx;
            } else {
                self.tracked_id = None;
            }
        }

        if !row_ids.is_empty() {
            self.selected = self.selected.min(row_ids.len() - 1);
            self.tracked_id = Some(row_ids[self.selected]);
            self.ratatui_state.select(Some(self.selected));
        } else {
            self.selected = 0;
            self.tracked_id = None;
            self.ratatui_state.select(None);
        }
    }
}

impl NavigableTable for BidsTabState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }

    fn clear_tracked(&mut self) {
        self.tracked_id = None;
    }
}

// ===========================================================================
// SKILLS tab state
// ===========================================================================

/// Which skills list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsPane {
    #[default]
    Included,
    Excluded,
}

impl SkillsPane {
    pub fn toggled(&self) -> SkillsPane {
        match self {
            SkillsPane::Included => SkillsPane::Excluded,
            SkillsPane::Excluded => SkillsPane::Included,
        }
    }
}

/// Selection in the two skills lists. Positions are plain indices; both lists
/// only change through this tab.
#[derive(Debug, Default)]
pub struct SkillsTabState {
    pub focus: SkillsPane,
    pub included_selected: usize,
    pub excluded_selected: usize,
    pub included_state: RatatuiTableState,
    pub excluded_state: RatatuiTableState,
}

impl SkillsTabState {
    /// Clamps both selections to the list lengths and syncs ratatui state.
    pub fn resolve_selection(&mut self, included_len: usize, excluded_len: usize) {
        self.included_selected = clamp_index(self.included_selected, included_len);
        self.excluded_selected = clamp_index(self.excluded_selected, excluded_len);

        let (inc, exc) = match self.focus {
            SkillsPane::Included => (Some(self.included_selected), None),
            SkillsPane::Excluded => (None, Some(self.excluded_selected)),
        };
        self.included_state.select(inc.filter(|_| included_len > 0));
        self.excluded_state.select(exc.filter(|_| excluded_len > 0));
    }
}

fn clamp_index(idx: usize, len: usize) -> usize {
    if len == 0 { 0 } else { idx.min(len - 1) }
}

impl NavigableTable for SkillsTabState {
    fn selected(&self) -> usize {
        match self.focus {
            SkillsPane::Included => self.included_selected,
            SkillsPane::Excluded => self.excluded_selected,
        }
    }

    fn selected_mut(&mut self) -> &mut usize {
        match self.focus {
            SkillsPane::Included => &mut self.included_selected,
            SkillsPane::Excluded => &mut self.excluded_selected,
        }
    }
}

// ===========================================================================
// Settings tabs
// ===========================================================================

/// Cursor over one list (skill sets page, profiles, log days, form rows).
#[derive(Debug, Default)]
pub struct ListTabState {
    pub selected: usize,
    pub ratatui_state: RatatuiTableState,
}

impl ListTabState {
    /// Clamps the selection to `len` rows. `focused` false leaves the list
    /// drawn without a highlighted row.
    pub fn resolve_selection(&mut self, len: usize, focused: bool) {
        self.selected = clamp_index(self.selected, len);
        self.ratatui_state
            .select(Some(self.selected).filter(|_| focused && len > 0));
    }
}

impl NavigableTable for ListTabState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }
}

/// Profile list, plus the skill checklist while the editor is open.
#[derive(Debug, Default)]
pub struct ProfilesTabState {
    pub list: ListTabState,
    pub editor: ListTabState,
}

/// Which AI bidding list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiPane {
    #[default]
    Form,
    Countries,
}

impl AiPane {
    pub fn toggled(&self) -> AiPane {
        match self {
            AiPane::Form => AiPane::Countries,
            AiPane::Countries => AiPane::Form,
        }
    }
}

#[derive(Debug, Default)]
pub struct AiBiddingTabState {
    pub focus: AiPane,
    pub form: ListTabState,
    pub countries: ListTabState,
}

impl AiBiddingTabState {
    pub fn focused_list(&mut self) -> &mut ListTabState {
        match self.focus {
            AiPane::Form => &mut self.form,
            AiPane::Countries => &mut self.countries,
        }
    }
}
