//! Skill sets: named groups of skills, searchable and paged, edited through
//! an add/edit form.

use std::fmt;

use tracing::debug;

const SEED: &[(&str, &str)] = &[
    ("API", "API, API Development, API Integration, FastAPI, GraphQL, REST API, RESTful API, Web API"),
    ("Automation", "Automation, Make.com, Zapier"),
    ("CMS", "CMS, Shopify, Shopify Development, Squarespace, Webflow, Wix"),
    ("Desktop & ERP", "Desktop Application, ERP Software"),
    (
        "Frontend",
        "Angular, Bootstrap, CSS, Frontend Development, HTML, HTML5, Next.js, PSD to HTML, \
         React.js, React.js Framework, TailWind, Tailwind CSS, Web Design, Website Design",
    ),
    ("Frontend", "Next.js, React.js, React.js Framework, Redux.js"),
    ("LAMP", "Core PHP, Laravel, PHP"),
    (
        "MERN",
        "Backend Development, Database Development, Express JS, Google Firebase, MongoDB, Node.js",
    ),
    (
        "Mobile",
        "Android App Development, App Developer, App Development, Hybrid App, \
         Mobile App Development, Progressive Web Apps, React Native, Web Application",
    ),
    ("Wordpress", "Elementor, WordPress, WordPress Design, WordPress Plugin"),
];

/// Stored in place of an empty skills field.
pub const NO_SKILLS: &str = "No skills listed";

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSet {
    pub id: u32,
    pub name: String,
    /// Comma-separated skill names, kept as typed.
    pub skills: String,
}

/// Rows per page; the panel offers 10, 20 or 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowEntries {
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl ShowEntries {
    pub fn count(self) -> usize {
        match self {
            ShowEntries::Ten => 10,
            ShowEntries::Twenty => 20,
            ShowEntries::Thirty => 30,
        }
    }

    pub fn next(self) -> ShowEntries {
        match self {
            ShowEntries::Ten => ShowEntries::Twenty,
            ShowEntries::Twenty => ShowEntries::Thirty,
            ShowEntries::Thirty => ShowEntries::Ten,
        }
    }
}

/// Form contents. `id` is `None` when adding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSetDraft {
    pub id: Option<u32>,
    pub name: String,
    pub skills: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillSetError {
    NameRequired,
    /// The edited skill set was deleted meanwhile.
    NotFound(u32),
}

impl fmt::Display for SkillSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillSetError::NameRequired => write!(f, "Name is required."),
            SkillSetError::NotFound(id) => write!(f, "Skill set {id} no longer exists."),
        }
    }
}

impl std::error::Error for SkillSetError {}

/// State of the skill sets panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsetsSettings {
    items: Vec<SkillSet>,
    search: String,
    show_entries: ShowEntries,
    /// 1-based.
    page: usize,
}

impl Default for SkillsetsSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillsetsSettings {
    pub fn new() -> Self {
        let items = SEED
            .iter()
            .zip(1..)
            .map(|(&(name, skills), id)| SkillSet {
                id,
                name: name.to_string(),
                skills: skills.to_string(),
            })
            .collect();
        Self::with_items(items)
    }

    pub fn with_items(items: Vec<SkillSet>) -> Self {
        Self {
            items,
            search: String::new(),
            show_entries: ShowEntries::default(),
            page: 1,
        }
    }

    pub fn items(&self) -> &[SkillSet] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&SkillSet> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn show_entries(&self) -> ShowEntries {
        self.show_entries
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// New search text; back to the first page.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        self.page = 1;
    }

    /// New page size; back to the first page.
    pub fn set_show_entries(&mut self, show: ShowEntries) {
        self.show_entries = show;
        self.page = 1;
    }

    /// Items whose name or skills contain the search text, ignoring case.
    pub fn filtered(&self) -> Vec<&SkillSet> {
        let needle = self.search.to_lowercase();
        self.items
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle) || s.skills.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.show_entries.count())
    }

    /// Matching items on the current page.
    pub fn page_items(&self) -> Vec<&SkillSet> {
        let show = self.show_entries.count();
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * show)
            .take(show)
            .collect()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// `Showing 1 to 10 of 10 entries`.
    pub fn showing_text(&self) -> String {
        let total = self.filtered().len();
        let start = (self.page - 1) * self.show_entries.count();
        let end = (start + self.show_entries.count()).min(total);
        format!("Showing {} to {} of {} entries", start + 1, end, total)
    }

    /// Form for a new skill set.
    pub fn add_draft(&self) -> SkillSetDraft {
        SkillSetDraft::default()
    }

    /// Form pre-filled from an existing skill set.
    pub fn edit_draft(&self, id: u32) -> Option<SkillSetDraft> {
        self.get(id).map(|s| SkillSetDraft {
            id: Some(s.id),
            name: s.name.clone(),
            skills: s.skills.clone(),
        })
    }

    /// Adds or updates from a form and returns the stored ID. Name and skills
    /// are trimmed; a new skill set gets the next ID after the highest one.
    pub fn save(&mut self, draft: &SkillSetDraft) -> Result<u32, SkillSetError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(SkillSetError::NameRequired);
        }
        let skills = match draft.skills.trim() {
            "" => NO_SKILLS,
            s => s,
        };

        match draft.id {
            None => {
                let id = self.items.iter().map(|s| s.id).max().map_or(1, |max| max + 1);
                self.items.push(SkillSet {
                    id,
                    name: name.to_string(),
                    skills: skills.to_string(),
                });
                debug!(id, name, "added skill set");
                Ok(id)
            }
            Some(id) => {
                let item = self
                    .items
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or(SkillSetError::NotFound(id))?;
                item.name = name.to_string();
                item.skills = skills.to_string();
                debug!(id, name, "updated skill set");
                Ok(id)
            }
        }
    }

    /// Removes by ID. The page steps back if it no longer exists.
    pub fn delete(&mut self, id: u32) -> Option<SkillSet> {
        let idx = self.items.iter().position(|s| s.id == id)?;
        let removed = self.items.remove(idx);
        self.page = self.page.min(self.total_pages().max(1));
        debug!(id, "deleted skill set");
        Some(removed)
    }
}
