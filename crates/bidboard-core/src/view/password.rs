//! Change password form: one row per field, values masked.

use crate::settings::{PasswordField, PasswordForm};
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

pub fn build_password_view(form: &PasswordForm) -> TableViewModel<PasswordField> {
    let rows = PasswordField::all()
        .iter()
        .map(|&field| {
            let masked = form.masked(field);
            let value = if masked.is_empty() {
                ViewCell::styled("(empty)".to_string(), RowStyleClass::Dimmed)
            } else {
                ViewCell::plain(masked)
            };
            ViewRow {
                id: field,
                cells: vec![ViewCell::plain(field.label().to_string()), value],
                style: RowStyleClass::Normal,
            }
        })
        .collect();

    TableViewModel {
        title: "Change Password".to_string(),
        headers: vec!["FIELD".into(), "VALUE".into()],
        widths: vec![22],
        rows,
        sort_column: None,
        sort_ascending: true,
        footer: "Enter edit field · s submit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_masked() {
        let mut form = PasswordForm::new();
        form.set(PasswordField::New, "hunter2");
        let vm = build_password_view(&form);
        assert_eq!(vm.rows.len(), 3);
        assert_eq!(vm.rows[0].cells[1].text, "(empty)");
        assert_eq!(vm.rows[1].cells[1].text, "•••••••");
        assert_eq!(vm.rows[2].cells[0].text, "Confirm new password");
    }
}
