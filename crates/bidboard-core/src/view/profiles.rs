//! Freelancer profile list and the profile editor's skill checklist.

use crate::settings::{ProfileEditor, ProfilesSettings};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

pub const EMPTY: &str = "No profiles found.";

pub fn build_profiles_view(settings: &ProfilesSettings) -> TableViewModel<u32> {
    let matching = settings.filtered();
    let rows: Vec<ViewRow<u32>> = matching
        .iter()
        .map(|p| ViewRow {
            id: p.id,
            cells: vec![
                ViewCell::styled(p.title.clone(), RowStyleClass::Accent),
                ViewCell::plain(format!("${}/hr", p.hourly_rate)),
                ViewCell::plain(p.skills.clone()),
            ],
            style: RowStyleClass::Normal,
        })
        .collect();

    let title = if settings.search().is_empty() {
        format!("Freelancer Profiles ({})", settings.profiles().len())
    } else {
        format!(
            "Freelancer Profiles ({} of {}) · search: {}",
            matching.len(),
            settings.profiles().len(),
            settings.search()
        )
    };
    let footer = if rows.is_empty() {
        EMPTY.to_string()
    } else {
        "Enter edit · r refresh · / search".to_string()
    };

    TableViewModel {
        title,
        headers: vec!["TITLE".into(), "RATE".into(), "SKILLS".into()],
        widths: vec![20, 9],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer,
    }
}

/// Applicable skills with their checked state, keyed by option index.
pub fn build_editor_view(editor: &ProfileEditor) -> TableViewModel<usize> {
    let rows = editor
        .options()
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let (mark, style) = if editor.is_selected(skill) {
                ("[x]", RowStyleClass::Active)
            } else {
                ("[ ]", RowStyleClass::Dimmed)
            };
            ViewRow {
                id: i,
                cells: vec![
                    ViewCell::styled(mark.to_string(), style),
                    ViewCell::plain(skill.clone()),
                ],
                style: RowStyleClass::Normal,
            }
        })
        .collect();

    TableViewModel {
        title: format!(
            "Edit Profile: {} · ${}/hr ({}/{} skills)",
            editor.title,
            editor.hourly_rate,
            editor.selected().len(),
            editor.options().len()
        ),
        headers: vec!["ON".into(), "APPLICABLE SKILL".into()],
        widths: vec![4],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer: "Space toggle · A all · U none · t title · r rate · Enter save · Esc cancel"
            .to_string(),
    }
}
