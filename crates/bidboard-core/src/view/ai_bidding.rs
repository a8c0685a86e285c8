//! AI bidding form rows and the country list.

use crate::settings::{AiBiddingSettings, AiField};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

pub const NOTICE: &str = "These filters are used for AI bids only. \
If a project does not meet them, a regular bid is placed instead.";

pub fn build_ai_form_view(settings: &AiBiddingSettings) -> TableViewModel<AiField> {
    let rows = AiField::all()
        .iter()
        .map(|&field| {
            let value = settings.value(field);
            let style = if field.is_numeric() || value != "Does not matter" {
                RowStyleClass::Accent
            } else {
                RowStyleClass::Dimmed
            };
            ViewRow {
                id: field,
                cells: vec![
                    ViewCell::plain(field.group().to_string()),
                    ViewCell::plain(field.label().to_string()),
                    ViewCell::styled(value, style),
                ],
                style: RowStyleClass::Normal,
            }
        })
        .collect();

    TableViewModel {
        title: "AI Bids Settings".to_string(),
        headers: vec!["GROUP".into(), "FILTER".into(), "VALUE".into()],
        widths: vec![15, 27],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer: "Space/Enter change · s save".to_string(),
    }
}

pub fn build_countries_view(settings: &AiBiddingSettings) -> TableViewModel<usize> {
    let rows = settings
        .countries()
        .iter()
        .enumerate()
        .map(|(i, country)| {
            let (state, style) = if country.active {
                ("on", RowStyleClass::Active)
            } else {
                ("off", RowStyleClass::Dimmed)
            };
            ViewRow {
                id: i,
                cells: vec![
                    ViewCell::plain(country.name.clone()),
                    ViewCell::styled(state.to_string(), style),
                ],
                style: if country.active {
                    RowStyleClass::Normal
                } else {
                    RowStyleClass::Dimmed
                },
            }
        })
        .collect();

    TableViewModel {
        title: format!(
            "AI Countries ({}/{} active)",
            settings.active_countries(),
            settings.countries().len()
        ),
        headers: vec!["COUNTRY".into(), "ON".into()],
        widths: vec![],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer: "Space toggle".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_rows_follow_field_order() {
        let mut settings = AiBiddingSettings::new();
        settings.cycle(AiField::EmailVerified);
        let vm = build_ai_form_view(&settings);
        assert_eq!(vm.rows.len(), 7);
        assert_eq!(vm.rows[0].cells[2].style, Some(RowStyleClass::Dimmed));
        assert_eq!(vm.rows[1].cells[2].text, "Required");
        assert_eq!(vm.rows[1].cells[2].style, Some(RowStyleClass::Accent));
        assert_eq!(vm.rows[5].id, AiField::MinFixedBudget);
        assert_eq!(vm.rows[5].cells[0].text, "Project Budget");
        assert_eq!(vm.rows[5].cells[2].text, "1500");
    }

    #[test]
    fn countries_show_active_count() {
        let mut settings = AiBiddingSettings::new();
        settings.toggle_country(0);
        let vm = build_countries_view(&settings);
        assert_eq!(vm.title, "AI Countries (28/29 active)");
        assert_eq!(vm.rows[0].cells[1].text, "off");
        assert_eq!(vm.rows[0].style, RowStyleClass::Dimmed);
    }
}
