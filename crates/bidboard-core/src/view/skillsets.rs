//! Skill sets table: the current page of matching skill sets.

use crate::settings::SkillsetsSettings;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

pub const EMPTY: &str = "No skill sets found.";

pub fn build_skillsets_view(settings: &SkillsetsSettings) -> TableViewModel<u32> {
    let rows: Vec<ViewRow<u32>> = settings
        .page_items()
        .into_iter()
        .map(|set| ViewRow {
            id: set.id,
            cells: vec![
                ViewCell::plain(set.id.to_string()),
                ViewCell::styled(set.name.clone(), RowStyleClass::Accent),
                ViewCell::plain(set.skills.clone()),
            ],
            style: RowStyleClass::Normal,
        })
        .collect();

    let title = if settings.search().is_empty() {
        format!("Skill Sets ({})", settings.items().len())
    } else {
        format!(
            "Skill Sets ({} of {}) · search: {}",
            settings.filtered().len(),
            settings.items().len(),
            settings.search()
        )
    };

    let footer = if rows.is_empty() {
        EMPTY.to_string()
    } else {
        format!(
            "{} · page {}/{} · {} per page",
            settings.showing_text(),
            settings.page(),
            settings.total_pages(),
            settings.show_entries().count()
        )
    };

    TableViewModel {
        title,
        headers: vec!["#".into(), "NAME".into(), "SKILLS".into()],
        widths: vec![4, 16],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_current_page() {
        let settings = SkillsetsSettings::new();
        let vm = build_skillsets_view(&settings);
        assert_eq!(vm.title, "Skill Sets (10)");
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.rows[3].id, 4);
        assert_eq!(vm.rows[3].cells[1].text, "Desktop & ERP");
        assert_eq!(
            vm.footer,
            "Showing 1 to 10 of 10 entries · page 1/1 · 10 per page"
        );
    }

    #[test]
    fn search_shows_matches_or_empty_state() {
        let mut settings = SkillsetsSettings::new();
        settings.set_search("php");
        let vm = build_skillsets_view(&settings);
        assert_eq!(vm.title, "Skill Sets (1 of 10) · search: php");
        assert_eq!(vm.rows[0].cells[1].text, "LAMP");

        settings.set_search("haskell");
        let vm = build_skillsets_view(&settings);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.footer, "No skill sets found.");
    }
}
