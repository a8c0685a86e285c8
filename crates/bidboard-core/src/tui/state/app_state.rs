//! Main application state.

use std::time::Duration;

use chrono::NaiveDate;

use crate::autobid::AutoBidding;
use crate::model::Bid;
use crate::settings::{
    AiBiddingSettings, BidLog, PasswordForm, ProfilesSettings, SkillSetDraft, SkillSetError,
    SkillsSettings, SkillsetsSettings,
};
use crate::util::{parse_amount_bound, parse_date};
use crate::view::bids::{Action, BidListViewModel};

use super::{
    AiBiddingTabState, BidsTabState, FilterField, FormField, InputMode, ListTabState,
    PopupState, ProfilesTabState, SkillsTabState, Tab,
};

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Text input buffer (search, filter popup, new skill, settings forms).
    pub input: String,
    /// Last parse error to display in the filter popup.
    pub input_error: Option<String>,
    /// Active popup state. Only one popup can be open at a time.
    pub popup: PopupState,
    /// Bid list: collection plus filter/sort/page state.
    pub bid_list: BidListViewModel,
    /// Auto-bidding switch.
    pub autobid: AutoBidding,
    /// Skills settings panel.
    pub skills: SkillsSettings,
    pub skillsets: SkillsetsSettings,
    pub profiles: ProfilesSettings,
    pub ai_bidding: AiBiddingSettings,
    pub bid_log: BidLog,
    pub password: PasswordForm,
    /// Skill set being filled in across the name and skills popups.
    pub skillset_draft: Option<SkillSetDraft>,
    /// BIDS tab selection.
    pub bids_tab: BidsTabState,
    /// SKILLS tab selection.
    pub skills_tab: SkillsTabState,
    pub skillsets_tab: ListTabState,
    pub profiles_tab: ProfilesTabState,
    pub ai_tab: AiBiddingTabState,
    pub bid_log_tab: ListTabState,
    pub password_tab: ListTabState,
    /// Reference date for `today` and relative date input.
    pub today: NaiveDate,
    /// Temporary status message shown in the header (toasts, blocked actions).
    pub status_message: Option<String>,
    /// Terminal width; the dashboard charts are hidden on narrow terminals.
    pub terminal_width: u16,
}

impl AppState {
    pub fn new(bids: Vec<Bid>, autobid_delay: Duration, today: NaiveDate) -> Self {
        Self {
            current_tab: Tab::Bids,
            input_mode: InputMode::Normal,
            input: String::new(),
            input_error: None,
            popup: PopupState::None,
            bid_list: BidListViewModel::new(bids),
            autobid: AutoBidding::new(autobid_delay),
            skills: SkillsSettings::new(),
            skillsets: SkillsetsSettings::new(),
            profiles: ProfilesSettings::new(),
            ai_bidding: AiBiddingSettings::new(),
            bid_log: BidLog::new(),
            password: PasswordForm::new(),
            skillset_draft: None,
            bids_tab: BidsTabState::default(),
            skills_tab: SkillsTabState::default(),
            skillsets_tab: ListTabState::default(),
            profiles_tab: ProfilesTabState::default(),
            ai_tab: AiBiddingTabState::default(),
            bid_log_tab: ListTabState::default(),
            password_tab: ListTabState::default(),
            today,
            status_message: None,
            terminal_width: 0,
        }
    }

    /// Returns true if any detail popup is currently open.
    pub fn any_popup_open(&self) -> bool {
        self.popup.is_detail_open()
    }

    /// Why tab switching is blocked, if an in-tab editor is open.
    pub fn open_editor_notice(&self) -> Option<&'static str> {
        if self.skills.is_priority_open() {
            Some("Save (Enter) or cancel (Esc) priorities before switching tabs")
        } else if self.profiles.is_editing() {
            Some("Save (Enter) or cancel (Esc) the profile before switching tabs")
        } else {
            None
        }
    }

    /// Switches to a new tab, clearing the tracked bid on the way out.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            if self.current_tab == Tab::Bids {
                self.bids_tab.tracked_id = None;
            }
            self.current_tab = new_tab;
        }
    }

    /// Dispatches a bid list action. Page changes move the cursor to the
    /// first row of the new page.
    pub fn dispatch(&mut self, action: Action) {
        let before = self.bid_list.state().page;
        self.bid_list.dispatch(action);
        if self.bid_list.state().page != before {
            self.bids_tab.selected = 0;
            self.bids_tab.tracked_id = None;
        }
    }

    /// ID of the bid under the cursor on the current page.
    pub fn selected_bid_id(&self) -> Option<u32> {
        let view = self.bid_list.view();
        view.rows.get(self.bids_tab.selected).map(|bid| bid.id)
    }

    /// Search text of the current tab.
    pub fn search_query(&self) -> String {
        match self.current_tab {
            Tab::Skillsets => self.skillsets.search().to_string(),
            Tab::Profiles => self.profiles.search().to_string(),
            _ => self.bid_list.state().filters.project_query.clone(),
        }
    }

    /// Applies live search text to the current tab.
    pub fn set_search_query(&mut self, query: String) {
        match self.current_tab {
            Tab::Skillsets => {
                self.skillsets.set_search(&query);
                self.skillsets_tab.selected = 0;
            }
            Tab::Profiles => {
                self.profiles.set_search(&query);
                self.profiles_tab.list.selected = 0;
            }
            _ => self.dispatch(Action::SetProjectQuery(query)),
        }
    }

    /// Skill set under the cursor on the current page.
    pub fn selected_skillset_id(&self) -> Option<u32> {
        let page = self.skillsets.page_items();
        page.get(self.skillsets_tab.selected).map(|s| s.id)
    }

    /// Profile under the cursor among the matching ones.
    pub fn selected_profile_id(&self) -> Option<u32> {
        let matching = self.profiles.filtered();
        matching.get(self.profiles_tab.list.selected).map(|p| p.id)
    }

    /// Opens the filter popup for `field`, pre-filled with nothing.
    pub fn begin_filter_input(&mut self, field: FilterField) {
        self.input_mode = InputMode::FilterInput(field);
        self.input.clear();
        self.input_error = None;
    }

    /// Applies the filter popup input. On a parse error the popup stays open
    /// with the error shown.
    pub fn submit_filter_input(&mut self) {
        let InputMode::FilterInput(field) = self.input_mode else {
            return;
        };

        let action = match field {
            FilterField::AmountMin => Action::SetAmountMin(parse_amount_bound(&self.input)),
            FilterField::AmountMax => Action::SetAmountMax(parse_amount_bound(&self.input)),
            FilterField::DateStart | FilterField::DateEnd => {
                let date = if self.input.trim().is_empty() {
                    None
                } else {
                    match parse_date(&self.input, self.today) {
                        Ok(date) => Some(date),
                        Err(e) => {
                            self.input_error = Some(e.message);
                            return;
                        }
                    }
                };
                if field == FilterField::DateStart {
                    Action::SetDateStart(date)
                } else {
                    Action::SetDateEnd(date)
                }
            }
        };

        self.dispatch(action);
        self.close_input();
    }

    /// Opens the settings popup for `field` with `prefill` as the text.
    pub fn begin_form_input(&mut self, field: FormField, prefill: &str) {
        self.input_mode = InputMode::FormInput(field);
        self.input = prefill.to_string();
        self.input_error = None;
    }

    /// Starts the two-step skill set form (name, then skills).
    pub fn begin_skillset_form(&mut self, draft: SkillSetDraft) {
        self.begin_form_input(FormField::SkillsetName, &draft.name);
        self.skillset_draft = Some(draft);
    }

    /// Applies the settings popup input. Invalid input keeps the popup open
    /// with the error shown.
    pub fn submit_form_input(&mut self) {
        let InputMode::FormInput(field) = self.input_mode else {
            return;
        };

        match field {
            FormField::SkillsetName => {
                if self.input.trim().is_empty() {
                    self.input_error = Some(SkillSetError::NameRequired.to_string());
                    return;
                }
                let Some(draft) = self.skillset_draft.as_mut() else {
                    self.close_input();
                    return;
                };
                draft.name = std::mem::take(&mut self.input);
                let skills = draft.skills.clone();
                self.begin_form_input(FormField::SkillsetSkills, &skills);
                return;
            }
            FormField::SkillsetSkills => {
                if let Some(mut draft) = self.skillset_draft.take() {
                    draft.skills = self.input.clone();
                    self.save_skillset(&draft);
                }
            }
            FormField::ProfileTitle => {
                if let Some(editor) = self.profiles.editor_mut() {
                    editor.set_title(&self.input);
                }
            }
            FormField::HourlyRate => {
                if let Some(editor) = self.profiles.editor_mut() {
                    if let Err(e) = editor.set_hourly_rate(&self.input) {
                        self.input_error = Some(e.to_string());
                        return;
                    }
                }
            }
            FormField::AiNumber(ai_field) => {
                if let Err(e) = self.ai_bidding.set_number(ai_field, &self.input) {
                    self.input_error = Some(e.to_string());
                    return;
                }
            }
            FormField::Password(pw_field) => self.password.set(pw_field, &self.input),
        }
        self.close_input();
    }

    fn save_skillset(&mut self, draft: &SkillSetDraft) {
        match self.skillsets.save(draft) {
            Ok(id) => {
                let page = self.skillsets.page_items();
                if let Some(pos) = page.iter().position(|s| s.id == id) {
                    self.skillsets_tab.selected = pos;
                }
                self.status_message = Some(format!("Saved skill set: {}", draft.name.trim()));
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Deletes the skill set named by an open delete confirmation.
    pub fn confirm_delete_skillset(&mut self) {
        if let PopupState::ConfirmDelete { id } = self.popup {
            if let Some(removed) = self.skillsets.delete(id) {
                self.status_message = Some(format!("Deleted skill set: {}", removed.name));
            }
        }
        self.popup = PopupState::None;
    }

    /// Saves the profile editor; a rejected title keeps it open.
    pub fn save_profile(&mut self) {
        self.status_message = Some(match self.profiles.save_editor() {
            Ok(message) => message,
            Err(e) => e.to_string(),
        });
    }

    /// Submits the password form and reports the outcome in the header.
    pub fn submit_password(&mut self) {
        self.status_message = Some(match self.password.submit() {
            Ok(message) => message.to_string(),
            Err(e) => e.to_string(),
        });
    }

    /// Adds the typed skill to the excluded list and leaves input mode.
    pub fn submit_skill_input(&mut self) {
        if self.skills.add_excluded(&self.input) {
            self.skills_tab.excluded_selected = self.skills.excluded().len() - 1;
        }
        self.close_input();
    }

    /// Leaves any input mode and clears the buffer. An unfinished skill set
    /// form is dropped.
    pub fn close_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.input_error = None;
        self.skillset_draft = None;
    }
}
