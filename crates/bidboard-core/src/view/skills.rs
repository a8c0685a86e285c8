//! Skills settings view models.

use crate::settings::{Skill, SkillsSettings};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

fn skill_rows(skills: &[Skill]) -> Vec<ViewRow<usize>> {
    skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let (state, style) = if skill.active {
                ("on", RowStyleClass::Active)
            } else {
                ("off", RowStyleClass::Dimmed)
            };
            ViewRow {
                id: i,
                cells: vec![
                    ViewCell::plain(format!("{}", i + 1)),
                    ViewCell::plain(skill.name.clone()),
                    ViewCell::styled(state.to_string(), style),
                ],
                style: if skill.active {
                    RowStyleClass::Normal
                } else {
                    RowStyleClass::Dimmed
                },
            }
        })
        .collect()
}

/// Included skills table. While the priority editor is open the draft order
/// is shown instead of the committed one.
pub fn build_included_view(settings: &SkillsSettings) -> TableViewModel<usize> {
    let (skills, title, footer) = match settings.priority_draft() {
        Some(draft) => (
            draft,
            "Set Skill Priorities (draft)".to_string(),
            "K/J move · R reset · Enter save · Esc cancel".to_string(),
        ),
        None => (
            settings.included(),
            format!(
                "Included Skills ({}/{} active)",
                settings.active_count(),
                settings.included().len()
            ),
            "Space toggle · o set priority".to_string(),
        ),
    };

    TableViewModel {
        title,
        headers: vec!["#".into(), "SKILL".into(), "ON".into()],
        widths: vec![4],
        rows: skill_rows(skills),
        sort_column: None,
        sort_ascending: true,
        footer,
    }
}

/// Excluded skills table.
pub fn build_excluded_view(settings: &SkillsSettings) -> TableViewModel<usize> {
    let rows = settings
        .excluded()
        .iter()
        .enumerate()
        .map(|(i, name)| ViewRow {
            id: i,
            cells: vec![ViewCell::plain(name.clone())],
            style: RowStyleClass::Normal,
        })
        .collect();

    let show = if settings.show_projects() { "yes" } else { "no" };
    TableViewModel {
        title: format!("Excluded Skills ({})", settings.excluded().len()),
        headers: vec!["SKILL".into()],
        widths: vec![],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer: format!("show projects: {show} · e add · d delete · v toggle"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn included_view_marks_inactive_skills() {
        let mut settings = SkillsSettings::new();
        settings.toggle_included(1);
        let vm = build_included_view(&settings);
        assert_eq!(vm.title, "Included Skills (42/43 active)");
        assert_eq!(vm.rows.len(), 43);
        assert_eq!(vm.rows[1].style, RowStyleClass::Dimmed);
        assert_eq!(vm.rows[1].cells[2].text, "off");
        assert_eq!(vm.rows[0].cells[0].text, "1");
    }

    #[test]
    fn included_view_shows_draft_while_editing() {
        let mut settings = SkillsSettings::new();
        settings.open_priority();
        settings.move_priority(42, 0);
        let vm = build_included_view(&settings);
        assert!(vm.title.contains("draft"));
        assert_eq!(vm.rows[0].cells[1].text, "Zapier");
    }

    #[test]
    fn excluded_view_lists_names() {
        let mut settings = SkillsSettings::new();
        settings.toggle_show_projects();
        let vm = build_excluded_view(&settings);
        assert_eq!(vm.rows.len(), 7);
        assert_eq!(vm.rows[0].cells[0].text, "Python");
        assert!(vm.footer.starts_with("show projects: yes"));
    }
}
