//! AI bidding filters: client requirements, minimum budgets, and the
//! countries AI bids are placed for. Projects that miss these filters get a
//! regular bid instead.

use std::fmt;

use tracing::{debug, info};

pub const SAVED: &str = "AI Bids Settings saved!";

const COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "American Samoa",
    "Andorra",
    "Angola",
    "Antigua and Barbuda",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bhutan",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Botswana",
    "Brazil",
    "Brunei",
    "Bulgaria",
    "Burkina Faso",
    "Burundi",
];

/// Payment and email verification requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verification {
    #[default]
    DoesNotMatter,
    Required,
    NotRequired,
}

impl Verification {
    pub fn label(&self) -> &'static str {
        match self {
            Verification::DoesNotMatter => "Does not matter",
            Verification::Required => "Required",
            Verification::NotRequired => "Not required",
        }
    }

    pub fn next(&self) -> Verification {
        match self {
            Verification::DoesNotMatter => Verification::Required,
            Verification::Required => Verification::NotRequired,
            Verification::NotRequired => Verification::DoesNotMatter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deposit {
    #[default]
    DoesNotMatter,
    Yes,
    No,
}

impl Deposit {
    pub fn label(&self) -> &'static str {
        match self {
            Deposit::DoesNotMatter => "Does not matter",
            Deposit::Yes => "Yes",
            Deposit::No => "No",
        }
    }

    pub fn next(&self) -> Deposit {
        match self {
            Deposit::DoesNotMatter => Deposit::Yes,
            Deposit::Yes => Deposit::No,
            Deposit::No => Deposit::DoesNotMatter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinRating {
    #[default]
    DoesNotMatter,
    ThreePlus,
    FourPlus,
    FiveOnly,
}

impl MinRating {
    pub fn label(&self) -> &'static str {
        match self {
            MinRating::DoesNotMatter => "Does not matter",
            MinRating::ThreePlus => "3+",
            MinRating::FourPlus => "4+",
            MinRating::FiveOnly => "5 only",
        }
    }

    pub fn next(&self) -> MinRating {
        match self {
            MinRating::DoesNotMatter => MinRating::ThreePlus,
            MinRating::ThreePlus => MinRating::FourPlus,
            MinRating::FourPlus => MinRating::FiveOnly,
            MinRating::FiveOnly => MinRating::DoesNotMatter,
        }
    }
}

/// One row of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiField {
    PaymentVerified,
    EmailVerified,
    DepositMade,
    MinRating,
    MinProjects,
    MinFixedBudget,
    MinHourlyBudget,
}

impl AiField {
    pub fn all() -> &'static [AiField] {
        &[
            AiField::PaymentVerified,
            AiField::EmailVerified,
            AiField::DepositMade,
            AiField::MinRating,
            AiField::MinProjects,
            AiField::MinFixedBudget,
            AiField::MinHourlyBudget,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AiField::PaymentVerified => "Payment verified",
            AiField::EmailVerified => "Email verified",
            AiField::DepositMade => "Deposit made",
            AiField::MinRating => "Minimum rating",
            AiField::MinProjects => "Minimum projects",
            AiField::MinFixedBudget => "Min fixed budget (in USD)",
            AiField::MinHourlyBudget => "Min hourly budget (in USD)",
        }
    }

    /// `Client Filters` or `Project Budget`.
    pub fn group(&self) -> &'static str {
        match self {
            AiField::MinFixedBudget | AiField::MinHourlyBudget => "Project Budget",
            _ => "Client Filters",
        }
    }

    /// Typed number rather than a fixed choice.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            AiField::MinProjects | AiField::MinFixedBudget | AiField::MinHourlyBudget
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiNumberError {
    pub field: AiField,
    pub input: String,
}

impl fmt::Display for AiNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be a whole number, got '{}'",
            self.field.label(),
            self.input
        )
    }
}

impl std::error::Error for AiNumberError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub active: bool,
}

/// State of the AI bidding panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AiBiddingSettings {
    pub payment_verified: Verification,
    pub email_verified: Verification,
    pub deposit_made: Deposit,
    pub min_rating: MinRating,
    pub min_projects: u32,
    pub min_fixed_budget: u32,
    pub min_hourly_budget: u32,
    countries: Vec<Country>,
}

impl Default for AiBiddingSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl AiBiddingSettings {
    pub fn new() -> Self {
        Self {
            payment_verified: Verification::default(),
            email_verified: Verification::default(),
            deposit_made: Deposit::default(),
            min_rating: MinRating::default(),
            min_projects: 0,
            min_fixed_budget: 1500,
            min_hourly_budget: 100,
            countries: COUNTRIES
                .iter()
                .map(|name| Country {
                    name: name.to_string(),
                    active: true,
                })
                .collect(),
        }
    }

    /// Display text of a field's current value.
    pub fn value(&self, field: AiField) -> String {
        match field {
            AiField::PaymentVerified => self.payment_verified.label().to_string(),
            AiField::EmailVerified => self.email_verified.label().to_string(),
            AiField::DepositMade => self.deposit_made.label().to_string(),
            AiField::MinRating => self.min_rating.label().to_string(),
            AiField::MinProjects => self.min_projects.to_string(),
            AiField::MinFixedBudget => self.min_fixed_budget.to_string(),
            AiField::MinHourlyBudget => self.min_hourly_budget.to_string(),
        }
    }

    /// Steps a choice field to its next option. Numeric fields are left
    /// alone and return false.
    pub fn cycle(&mut self, field: AiField) -> bool {
        match field {
            AiField::PaymentVerified => self.payment_verified = self.payment_verified.next(),
            AiField::EmailVerified => self.email_verified = self.email_verified.next(),
            AiField::DepositMade => self.deposit_made = self.deposit_made.next(),
            AiField::MinRating => self.min_rating = self.min_rating.next(),
            AiField::MinProjects | AiField::MinFixedBudget | AiField::MinHourlyBudget => {
                return false;
            }
        }
        debug!(field = field.label(), value = %self.value(field), "changed AI filter");
        true
    }

    /// Sets a numeric field from typed text. Only whole, non-negative numbers
    /// are accepted; choice fields reject any input.
    pub fn set_number(&mut self, field: AiField, input: &str) -> Result<(), AiNumberError> {
        let err = || AiNumberError {
            field,
            input: input.to_string(),
        };
        let value = input.trim().parse::<u32>().map_err(|_| err())?;
        match field {
            AiField::MinProjects => self.min_projects = value,
            AiField::MinFixedBudget => self.min_fixed_budget = value,
            AiField::MinHourlyBudget => self.min_hourly_budget = value,
            _ => return Err(err()),
        }
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn active_countries(&self) -> usize {
        self.countries.iter().filter(|c| c.active).count()
    }

    /// Flips a country. Out-of-range is a no-op.
    pub fn toggle_country(&mut self, idx: usize) {
        if let Some(country) = self.countries.get_mut(idx) {
            country.active = !country.active;
            debug!(country = %country.name, active = country.active, "toggled AI country");
        }
    }

    /// Returns the confirmation shown after saving.
    pub fn save(&self) -> &'static str {
        info!(
            payment = self.payment_verified.label(),
            email = self.email_verified.label(),
            deposit = self.deposit_made.label(),
            rating = self.min_rating.label(),
            min_projects = self.min_projects,
            min_fixed = self.min_fixed_budget,
            min_hourly = self.min_hourly_budget,
            countries = self.active_countries(),
            "AI bidding settings saved"
        );
        SAVED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = AiBiddingSettings::new();
        assert_eq!(s.value(AiField::PaymentVerified), "Does not matter");
        assert_eq!(s.value(AiField::MinRating), "Does not matter");
        assert_eq!(s.value(AiField::MinProjects), "0");
        assert_eq!(s.value(AiField::MinFixedBudget), "1500");
        assert_eq!(s.value(AiField::MinHourlyBudget), "100");
        assert_eq!(s.countries().len(), 29);
        assert_eq!(s.active_countries(), 29);
    }

    #[test]
    fn choice_fields_cycle_through_options() {
        let mut s = AiBiddingSettings::new();
        assert!(s.cycle(AiField::PaymentVerified));
        assert_eq!(s.payment_verified, Verification::Required);
        s.cycle(AiField::PaymentVerified);
        s.cycle(AiField::PaymentVerified);
        assert_eq!(s.payment_verified, Verification::DoesNotMatter);

        s.cycle(AiField::DepositMade);
        assert_eq!(s.value(AiField::DepositMade), "Yes");

        let ratings: Vec<String> = (0..4)
            .map(|_| {
                s.cycle(AiField::MinRating);
                s.value(AiField::MinRating)
            })
            .collect();
        assert_eq!(ratings, vec!["3+", "4+", "5 only", "Does not matter"]);

        assert!(!s.cycle(AiField::MinProjects));
        assert_eq!(s.email_verified, Verification::DoesNotMatter);
    }

    #[test]
    fn numbers_accept_whole_values_only() {
        let mut s = AiBiddingSettings::new();
        assert!(s.set_number(AiField::MinProjects, " 5 ").is_ok());
        assert_eq!(s.min_projects, 5);
        assert!(s.set_number(AiField::MinFixedBudget, "2000").is_ok());
        assert_eq!(s.min_fixed_budget, 2000);

        let err = s.set_number(AiField::MinHourlyBudget, "12.5").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Min hourly budget (in USD) must be a whole number, got '12.5'"
        );
        assert!(s.set_number(AiField::MinHourlyBudget, "-1").is_err());
        assert!(s.set_number(AiField::MinHourlyBudget, "").is_err());
        assert_eq!(s.min_hourly_budget, 100);

        assert!(s.set_number(AiField::MinRating, "4").is_err());
    }

    #[test]
    fn countries_toggle_individually() {
        let mut s = AiBiddingSettings::new();
        s.toggle_country(1);
        assert!(!s.countries()[1].active);
        assert_eq!(s.countries()[1].name, "Albania");
        assert_eq!(s.active_countries(), 28);
        s.toggle_country(99);
        assert_eq!(s.active_countries(), 28);
        assert_eq!(s.save(), "AI Bids Settings saved!");
    }

    #[test]
    fn fields_are_grouped_for_display() {
        let groups: Vec<&str> = AiField::all().iter().map(|f| f.group()).collect();
        assert_eq!(groups.iter().filter(|g| **g == "Client Filters").count(), 5);
        assert!(AiField::MinFixedBudget.is_numeric());
        assert!(!AiField::DepositMade.is_numeric());
    }
}
