//! Change password form.

use std::fmt;

use tracing::info;

pub const CHANGED: &str = "Password changed successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordField {
    #[default]
    Old,
    New,
    Confirm,
}

impl PasswordField {
    pub fn all() -> &'static [PasswordField] {
        &[PasswordField::Old, PasswordField::New, PasswordField::Confirm]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordField::Old => "Old password",
            PasswordField::New => "New password",
            PasswordField::Confirm => "Confirm new password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    MissingField,
    Mismatch,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::MissingField => write!(f, "All fields are required."),
            PasswordError::Mismatch => {
                write!(f, "New password and confirm password do not match.")
            }
        }
    }
}

impl std::error::Error for PasswordError {}

/// The three form fields. Values never reach logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    old: String,
    new: String,
    confirm: String,
}

impl fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordForm")
            .field("old", &self.old.len())
            .field("new", &self.new.len())
            .field("confirm", &self.confirm.len())
            .finish()
    }
}

impl PasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: PasswordField) -> &str {
        match field {
            PasswordField::Old => &self.old,
            PasswordField::New => &self.new,
            PasswordField::Confirm => &self.confirm,
        }
    }

    pub fn set(&mut self, field: PasswordField, value: &str) {
        let slot = match field {
            PasswordField::Old => &mut self.old,
            PasswordField::New => &mut self.new,
            PasswordField::Confirm => &mut self.confirm,
        };
        *slot = value.to_string();
    }

    /// One bullet per character.
    pub fn masked(&self, field: PasswordField) -> String {
        "•".repeat(self.value(field).chars().count())
    }

    /// Checks the form. Every field must be non-empty and the new password
    /// must equal the confirmation; values are compared as typed. On success
    /// the form is cleared.
    pub fn submit(&mut self) -> Result<&'static str, PasswordError> {
        if self.old.is_empty() || self.new.is_empty() || self.confirm.is_empty() {
            return Err(PasswordError::MissingField);
        }
        if self.new != self.confirm {
            return Err(PasswordError::Mismatch);
        }
        *self = Self::default();
        info!("password changed");
        Ok(CHANGED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(old: &str, new: &str, confirm: &str) -> PasswordForm {
        let mut form = PasswordForm::new();
        form.set(PasswordField::Old, old);
        form.set(PasswordField::New, new);
        form.set(PasswordField::Confirm, confirm);
        form
    }

    #[test]
    fn every_field_is_required() {
        for field in PasswordField::all() {
            let mut form = filled("a", "b", "b");
            form.set(*field, "");
            assert_eq!(form.submit(), Err(PasswordError::MissingField));
        }
        assert_eq!(
            PasswordError::MissingField.to_string(),
            "All fields are required."
        );
    }

    #[test]
    fn new_must_match_confirmation() {
        let mut form = filled("old", "secret", "Secret");
        assert_eq!(form.submit(), Err(PasswordError::Mismatch));
        // A failed submit keeps what was typed.
        assert_eq!(form.value(PasswordField::New), "secret");
        assert_eq!(
            PasswordError::Mismatch.to_string(),
            "New password and confirm password do not match."
        );
    }

    #[test]
    fn success_clears_form() {
        let mut form = filled("old", "secret", "secret");
        assert_eq!(form.submit(), Ok("Password changed successfully!"));
        assert_eq!(form, PasswordForm::new());
    }

    #[test]
    fn masked_and_debug_hide_values() {
        let form = filled("abc", "dé", "");
        assert_eq!(form.masked(PasswordField::Old), "•••");
        assert_eq!(form.masked(PasswordField::New), "••");
        assert_eq!(form.masked(PasswordField::Confirm), "");
        assert!(!format!("{form:?}").contains("abc"));
    }
}
