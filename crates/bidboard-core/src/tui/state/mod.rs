//! Application state management.

mod app_state;
mod tab_states;

use crate::settings::{AiField, PasswordField};

pub use app_state::*;
pub use tab_states::*;

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Bids,
    Skills,
    Skillsets,
    Profiles,
    AiBidding,
    BidLog,
    Password,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Bids,
            Tab::Skills,
            Tab::Skillsets,
            Tab::Profiles,
            Tab::AiBidding,
            Tab::BidLog,
            Tab::Password,
        ]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Bids => "BIDS",
            Tab::Skills => "SKILLS",
            Tab::Skillsets => "SKILLSETS",
            Tab::Profiles => "PROFILES",
            Tab::AiBidding => "AI BIDS",
            Tab::BidLog => "BID LOG",
            Tab::Password => "PASSWORD",
        }
    }

    fn position(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// Returns the next tab, wrapping after the last.
    pub fn next(&self) -> Tab {
        let all = Tab::all();
        all[(self.position() + 1) % all.len()]
    }

    /// Returns the previous tab, wrapping before the first.
    pub fn prev(&self) -> Tab {
        let all = Tab::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// Bid filter edited through the input popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    AmountMin,
    AmountMax,
    DateStart,
    DateEnd,
}

impl FilterField {
    pub fn title(&self) -> &'static str {
        match self {
            FilterField::AmountMin => "Minimum amount",
            FilterField::AmountMax => "Maximum amount",
            FilterField::DateStart => "Start date",
            FilterField::DateEnd => "End date",
        }
    }

    /// Example inputs shown in the popup.
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            FilterField::AmountMin | FilterField::AmountMax => {
                &["600", "$1,250", "(empty clears the bound)"]
            }
            FilterField::DateStart | FilterField::DateEnd => &[
                "2025-01-05",
                "2025-01-05T10:00:00",
                "today",
                "-7d, -2w  (relative to today)",
                "(empty clears the bound)",
            ],
        }
    }
}

/// Settings value edited through the input popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    SkillsetName,
    SkillsetSkills,
    ProfileTitle,
    HourlyRate,
    AiNumber(AiField),
    Password(PasswordField),
}

impl FormField {
    pub fn title(&self) -> &'static str {
        match self {
            FormField::SkillsetName => "Skill set name",
            FormField::SkillsetSkills => "Skills (comma separated)",
            FormField::ProfileTitle => "Profile title",
            FormField::HourlyRate => "Hourly rate (USD)",
            FormField::AiNumber(field) => field.label(),
            FormField::Password(field) => field.label(),
        }
    }

    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            FormField::SkillsetName => &["Frontend", "(required)"],
            FormField::SkillsetSkills => &["React.js, Next.js, Tailwind CSS", "(empty: No skills listed)"],
            FormField::ProfileTitle => &["CMS Developer"],
            FormField::HourlyRate => &["30", "$45"],
            FormField::AiNumber(_) => &["0", "1500"],
            FormField::Password(_) => &[],
        }
    }

    /// Typed text is shown as bullets.
    pub fn is_secret(&self) -> bool {
        matches!(self, FormField::Password(_))
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Live search (`/`) on the bids, skill sets and profiles tabs.
    Search,
    /// Filter popup; applied on Enter.
    FilterInput(FilterField),
    /// New excluded skill (`e` on the skills tab).
    SkillInput,
    /// Settings form popup; applied on Enter.
    FormInput(FormField),
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Bid detail popup (bids tab).
    BidDetail { id: u32 },
    /// Delete confirmation for a skill set.
    ConfirmDelete { id: u32 },
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns true if a detail popup is open.
    pub fn is_detail_open(&self) -> bool {
        matches!(self, Self::BidDetail { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_wrap_both_ways() {
        assert_eq!(Tab::Bids.next(), Tab::Skills);
        assert_eq!(Tab::Password.next(), Tab::Bids);
        assert_eq!(Tab::Bids.prev(), Tab::Password);
        assert_eq!(Tab::BidLog.prev(), Tab::AiBidding);

        let mut tab = Tab::Bids;
        for _ in Tab::all() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Bids);
    }

    #[test]
    fn password_fields_are_secret() {
        assert!(FormField::Password(PasswordField::New).is_secret());
        assert!(!FormField::HourlyRate.is_secret());
        assert_eq!(
            FormField::AiNumber(AiField::MinProjects).title(),
            "Minimum projects"
        );
    }
}
