//! Freelancer profiles: searchable list, refresh, and an editor for title,
//! hourly rate and applicable skills.

use std::fmt;

use tracing::{debug, info};

const SEED: &[(&str, &str)] = &[
    ("CMS Developer", "WordPress, Shopify Development, WordPress Plugin, Wix"),
    ("MERN Stack Expert", "node.js, Next.js, React.js"),
    ("LAMP Stack Expert", "PHP, Core PHP, Laravel, WordPress, WordPress Plugin"),
];

/// Skills offered by the profile editor.
pub const APPLICABLE_SKILLS: &[&str] = &[
    "Blog Design",
    "CMS",
    "Core PHP",
    "CSS",
    "Elementor",
    "HTML",
    "Landing Pages",
    "Laravel",
    "Mobile App Development",
    "MySQL",
    "PSD to HTML",
    "React.js",
    "Shopify",
    "Shopify Development",
    "Shopify Templates",
    "Squarespace",
    "Website Design",
    "Wix",
    "WordPress",
    "WordPress Design",
    "WordPress Multilingual",
    "WordPress Plugin",
    "Next.js",
    "Node.js",
    "PHP",
];

pub const DEFAULT_HOURLY_RATE: u32 = 30;

pub const REFRESHED: &str = "Success! Profiles refreshed successfully.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: u32,
    pub title: String,
    /// Comma-separated, as shown in the list.
    pub skills: String,
    pub hourly_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    TitleRequired,
    InvalidRate(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::TitleRequired => write!(f, "Profile title is required."),
            ProfileError::InvalidRate(input) => {
                write!(f, "Hourly rate must be a whole number of USD, got '{input}'")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Open editor for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    pub profile_id: u32,
    pub title: String,
    pub hourly_rate: u32,
    /// Applicable skills, then any profile skills outside that list.
    options: Vec<String>,
    /// In the order they were picked.
    selected: Vec<String>,
}

impl ProfileEditor {
    fn for_profile(profile: &Profile) -> Self {
        let selected: Vec<String> = split_skills(&profile.skills);
        let mut options: Vec<String> = APPLICABLE_SKILLS.iter().map(|s| s.to_string()).collect();
        for skill in &selected {
            if !options.contains(skill) {
                options.push(skill.clone());
            }
        }
        Self {
            profile_id: profile.id,
            title: profile.title.clone(),
            hourly_rate: profile.hourly_rate,
            options,
            selected,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, skill: &str) -> bool {
        self.selected.iter().any(|s| s == skill)
    }

    /// Picks or unpicks the option at `idx`. Out-of-range is a no-op.
    pub fn toggle_skill(&mut self, idx: usize) {
        let Some(skill) = self.options.get(idx) else {
            return;
        };
        if let Some(pos) = self.selected.iter().position(|s| s == skill) {
            self.selected.remove(pos);
        } else {
            self.selected.push(skill.clone());
        }
    }

    pub fn check_all(&mut self) {
        self.selected = self.options.clone();
    }

    pub fn uncheck_all(&mut self) {
        self.selected.clear();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Parses a whole-dollar rate; `$` and surrounding spaces are allowed.
    pub fn set_hourly_rate(&mut self, input: &str) -> Result<(), ProfileError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let rate = digits
            .parse::<u32>()
            .map_err(|_| ProfileError::InvalidRate(input.to_string()))?;
        self.hourly_rate = rate;
        Ok(())
    }
}

fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// State of the freelancer profiles panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilesSettings {
    profiles: Vec<Profile>,
    search: String,
    editor: Option<ProfileEditor>,
}

impl Default for ProfilesSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfilesSettings {
    pub fn new() -> Self {
        let profiles = SEED
            .iter()
            .zip(1..)
            .map(|(&(title, skills), id)| Profile {
                id,
                title: title.to_string(),
                skills: skills.to_string(),
                hourly_rate: DEFAULT_HOURLY_RATE,
            })
            .collect();
        Self {
            profiles,
            search: String::new(),
            editor: None,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    /// Profiles whose title or skills contain the search text, ignoring case.
    pub fn filtered(&self) -> Vec<&Profile> {
        let needle = self.search.to_lowercase();
        self.profiles
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle) || p.skills.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Reloads the profile list and returns the confirmation shown to the user.
    pub fn refresh(&mut self) -> &'static str {
        info!(count = self.profiles.len(), "profiles refreshed");
        REFRESHED
    }

    pub fn editor(&self) -> Option<&ProfileEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ProfileEditor> {
        self.editor.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Opens the editor on a profile. False if the ID is unknown.
    pub fn open_editor(&mut self, id: u32) -> bool {
        match self.profiles.iter().find(|p| p.id == id) {
            Some(profile) => {
                self.editor = Some(ProfileEditor::for_profile(profile));
                true
            }
            None => false,
        }
    }

    pub fn cancel_editor(&mut self) {
        self.editor = None;
    }

    /// Writes the editor back to its profile and closes it. Returns the
    /// `Profile updated: ...` confirmation. A blank title keeps the editor
    /// open.
    pub fn save_editor(&mut self) -> Result<String, ProfileError> {
        let Some(editor) = self.editor.as_ref() else {
            return Ok(String::new());
        };
        let title = editor.title.trim();
        if title.is_empty() {
            return Err(ProfileError::TitleRequired);
        }
        let skills = editor.selected.join(", ");
        let message = format!("Profile updated: {title}, Skills: {skills}");

        if let Some(profile) = self.profiles.iter_mut().find(|p| p.id == editor.profile_id) {
            profile.title = title.to_string();
            profile.skills = skills;
            profile.hourly_rate = editor.hourly_rate;
            debug!(id = profile.id, title = %profile.title, "saved profile");
        }
        self.editor = None;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(profiles: &[&Profile]) -> Vec<String> {
        profiles.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn seed_state() {
        let s = ProfilesSettings::new();
        assert_eq!(s.profiles().len(), 3);
        assert_eq!(s.profiles()[1].title, "MERN Stack Expert");
        assert!(s.profiles().iter().all(|p| p.hourly_rate == 30));
        assert!(!s.is_editing());
        assert_eq!(APPLICABLE_SKILLS.len(), 25);
    }

    #[test]
    fn search_matches_title_or_skills() {
        let mut s = ProfilesSettings::new();
        s.set_search("stack");
        assert_eq!(titles(&s.filtered()), vec!["MERN Stack Expert", "LAMP Stack Expert"]);

        s.set_search("WORDPRESS");
        assert_eq!(titles(&s.filtered()), vec!["CMS Developer", "LAMP Stack Expert"]);

        s.set_search("NODE.JS");
        assert_eq!(titles(&s.filtered()), vec!["MERN Stack Expert"]);

        s.set_search("rust");
        assert!(s.filtered().is_empty());
    }

    #[test]
    fn refresh_reports_success() {
        let mut s = ProfilesSettings::new();
        assert_eq!(s.refresh(), "Success! Profiles refreshed successfully.");
    }

    #[test]
    fn editor_starts_from_profile() {
        let mut s = ProfilesSettings::new();
        assert!(!s.open_editor(9));
        assert!(s.open_editor(2));
        let editor = s.editor().unwrap();
        assert_eq!(editor.title, "MERN Stack Expert");
        assert_eq!(editor.selected(), ["node.js", "Next.js", "React.js"]);
        // "node.js" is not spelled like the applicable "Node.js".
        assert_eq!(editor.options().len(), 26);
        assert_eq!(editor.options()[25], "node.js");
    }

    #[test]
    fn toggle_and_bulk_selection() {
        let mut s = ProfilesSettings::new();
        s.open_editor(1);
        let editor = s.editor_mut().unwrap();
        assert!(editor.is_selected("Wix"));

        let wix = editor.options().iter().position(|o| o == "Wix").unwrap();
        editor.toggle_skill(wix);
        assert!(!editor.is_selected("Wix"));
        editor.toggle_skill(wix);
        assert_eq!(editor.selected().last().map(String::as_str), Some("Wix"));
        editor.toggle_skill(500);

        editor.check_all();
        assert_eq!(editor.selected().len(), 25);
        editor.uncheck_all();
        assert!(editor.selected().is_empty());
    }

    #[test]
    fn hourly_rate_must_be_whole_number() {
        let mut s = ProfilesSettings::new();
        s.open_editor(1);
        let editor = s.editor_mut().unwrap();
        assert!(editor.set_hourly_rate(" $45 ").is_ok());
        assert_eq!(editor.hourly_rate, 45);
        assert_eq!(
            editor.set_hourly_rate("4.5"),
            Err(ProfileError::InvalidRate("4.5".to_string()))
        );
        assert!(editor.set_hourly_rate("-3").is_err());
        assert_eq!(editor.hourly_rate, 45);
    }

    #[test]
    fn save_writes_back_and_reports() {
        let mut s = ProfilesSettings::new();
        s.open_editor(1);
        let editor = s.editor_mut().unwrap();
        editor.set_title(" WordPress Pro ");
        editor.uncheck_all();
        editor.toggle_skill(0);
        editor.toggle_skill(1);
        editor.set_hourly_rate("50").unwrap();

        let message = s.save_editor().unwrap();
        assert_eq!(message, "Profile updated: WordPress Pro, Skills: Blog Design, CMS");
        assert!(!s.is_editing());
        let profile = &s.profiles()[0];
        assert_eq!(profile.title, "WordPress Pro");
        assert_eq!(profile.skills, "Blog Design, CMS");
        assert_eq!(profile.hourly_rate, 50);
    }

    #[test]
    fn blank_title_keeps_editor_open_and_cancel_discards() {
        let mut s = ProfilesSettings::new();
        s.open_editor(3);
        s.editor_mut().unwrap().set_title("  ");
        assert_eq!(s.save_editor(), Err(ProfileError::TitleRequired));
        assert!(s.is_editing());

        s.cancel_editor();
        assert!(!s.is_editing());
        assert_eq!(s.profiles()[2].title, "LAMP Stack Expert");
    }
}
