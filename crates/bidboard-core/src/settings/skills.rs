//! Skills settings: included skills with on/off toggles, excluded skills,
//! and a priority order edited as a draft.

use tracing::debug;

const INCLUDED_SKILLS: &[&str] = &[
    "API Development",
    "API Integration",
    "Android App Development",
    "Apache",
    "App Development",
    "Backend Development",
    "Blockchain",
    "Bootstrap",
    "Core PHP",
    "Cryptocurrency",
    "Database Development",
    "Desktop Application",
    "Electron JS",
    "ERP Software",
    "Express JS",
    "Facebook Marketing",
    "FastAPI",
    "Figma",
    "Full Stack Development",
    "Git",
    "Google Analytics",
    "GraphQL",
    "HTML",
    "JavaScript",
    "Machine Learning (ML)",
    "MongoDB",
    "MySQL",
    "Next.js",
    "Node.js",
    "PHP",
    "React Native",
    "React.js",
    "Redux.js",
    "Shopify",
    "Tailwind CSS",
    "TypeScript",
    "UI / User Interface",
    "UX / User Experience",
    "Vercel",
    "Web Design",
    "Web Development",
    "WordPress",
    "Zapier",
];

const EXCLUDED_SKILLS: &[&str] = &[
    "Python",
    "C# Programming",
    "Java",
    "Oracle",
    "Moodle",
    "Sharepoint",
    "Mac OS X",
];

/// A skill used for bid matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub active: bool,
}

impl Skill {
    fn active(name: &str) -> Self {
        Self {
            name: name.to_string(),
            active: true,
        }
    }
}

/// Included skills in their initial (seed) order, all active.
pub fn initial_included_skills() -> Vec<Skill> {
    INCLUDED_SKILLS.iter().map(|s| Skill::active(s)).collect()
}

/// State of the skills settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsSettings {
    included: Vec<Skill>,
    excluded: Vec<String>,
    /// Show projects for excluded skills on the search page.
    show_projects: bool,
    /// Priority order being edited; `None` when the editor is closed.
    priority_draft: Option<Vec<Skill>>,
}

impl Default for SkillsSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsSettings {
    pub fn new() -> Self {
        Self {
            included: initial_included_skills(),
            excluded: EXCLUDED_SKILLS.iter().map(|s| s.to_string()).collect(),
            show_projects: false,
            priority_draft: None,
        }
    }

    pub fn included(&self) -> &[Skill] {
        &self.included
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn show_projects(&self) -> bool {
        self.show_projects
    }

    pub fn active_count(&self) -> usize {
        self.included.iter().filter(|s| s.active).count()
    }

    /// Flips the active flag of an included skill. Out-of-range is a no-op.
    pub fn toggle_included(&mut self, idx: usize) {
        if let Some(skill) = self.included.get_mut(idx) {
            skill.active = !skill.active;
            debug!(skill = %skill.name, active = skill.active, "toggled skill");
        }
    }

    /// Adds an excluded skill. Blank input is rejected.
    pub fn add_excluded(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.excluded.push(name.to_string());
        true
    }

    /// Removes an excluded skill, returning it. Out-of-range is a no-op.
    pub fn remove_excluded(&mut self, idx: usize) -> Option<String> {
        if idx < self.excluded.len() {
            Some(self.excluded.remove(idx))
        } else {
            None
        }
    }

    pub fn toggle_show_projects(&mut self) {
        self.show_projects = !self.show_projects;
    }

    // -----------------------------------------------------------------------
    // Priority draft
    // -----------------------------------------------------------------------

    /// Current draft order, if the editor is open.
    pub fn priority_draft(&self) -> Option<&[Skill]> {
        self.priority_draft.as_deref()
    }

    pub fn is_priority_open(&self) -> bool {
        self.priority_draft.is_some()
    }

    /// Opens the editor with a copy of the current included order.
    pub fn open_priority(&mut self) {
        self.priority_draft = Some(self.included.clone());
    }

    /// Moves the draft item at `from` to position `to`, shifting the items in
    /// between. Returns false if the editor is closed or an index is out of
    /// range.
    pub fn move_priority(&mut self, from: usize, to: usize) -> bool {
        let Some(draft) = self.priority_draft.as_mut() else {
            return false;
        };
        if from >= draft.len() || to >= draft.len() {
            return false;
        }
        if from != to {
            let item = draft.remove(from);
            draft.insert(to, item);
        }
        true
    }

    /// Restores the draft to the initial seed order.
    pub fn reset_priority(&mut self) {
        if let Some(draft) = self.priority_draft.as_mut() {
            *draft = initial_included_skills();
        }
    }

    /// Commits the draft as the new included order and closes the editor.
    pub fn save_priority(&mut self) {
        if let Some(draft) = self.priority_draft.take() {
            debug!(count = draft.len(), "saved skill priorities");
            self.included = draft;
        }
    }

    /// Discards the draft.
    pub fn cancel_priority(&mut self) {
        self.priority_draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn seed_state() {
        let s = SkillsSettings::new();
        assert_eq!(s.included().len(), 43);
        assert_eq!(s.excluded().len(), 7);
        assert_eq!(s.active_count(), 43);
        assert!(!s.show_projects());
        assert!(!s.is_priority_open());
    }

    #[test]
    fn toggle_included_flips_one_skill() {
        let mut s = SkillsSettings::new();
        s.toggle_included(2);
        assert!(!s.included()[2].active);
        assert_eq!(s.active_count(), 42);
        s.toggle_included(2);
        assert!(s.included()[2].active);
        s.toggle_included(1000);
        assert_eq!(s.active_count(), 43);
    }

    #[test]
    fn excluded_add_and_remove() {
        let mut s = SkillsSettings::new();
        assert!(!s.add_excluded("   "));
        assert!(s.add_excluded("  Rust  "));
        assert_eq!(s.excluded().last().map(String::as_str), Some("Rust"));

        assert_eq!(s.remove_excluded(0).as_deref(), Some("Python"));
        assert_eq!(s.excluded().len(), 7);
        assert_eq!(s.remove_excluded(99), None);
    }

    #[test]
    fn priority_move_follows_array_move() {
        let mut s = SkillsSettings::new();
        assert!(!s.move_priority(0, 1));

        s.open_priority();
        assert!(s.move_priority(0, 2));
        let draft = s.priority_draft().unwrap();
        assert_eq!(
            names(&draft[..3]),
            vec!["API Integration", "Android App Development", "API Development"]
        );

        assert!(s.move_priority(2, 0));
        let draft = s.priority_draft().unwrap();
        assert_eq!(draft[0].name, "API Development");

        assert!(!s.move_priority(0, 43));
        // Draft edits do not touch the committed order.
        assert_eq!(s.included()[0].name, "API Development");
    }

    #[test]
    fn priority_save_commits_and_cancel_discards() {
        let mut s = SkillsSettings::new();
        s.open_priority();
        s.move_priority(42, 0);
        s.cancel_priority();
        assert_eq!(s.included()[0].name, "API Development");

        s.open_priority();
        s.move_priority(42, 0);
        s.save_priority();
        assert!(!s.is_priority_open());
        assert_eq!(s.included()[0].name, "Zapier");
        assert_eq!(s.included().len(), 43);
    }

    #[test]
    fn priority_reset_restores_seed_order() {
        let mut s = SkillsSettings::new();
        s.toggle_included(0);
        s.open_priority();
        s.move_priority(5, 1);
        s.reset_priority();
        let draft = s.priority_draft().unwrap();
        assert_eq!(draft, initial_included_skills().as_slice());
        // Reset takes the seed list, including its active flags.
        assert!(draft[0].active);
    }
}
