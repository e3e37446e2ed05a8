//! Customer input validation
//!
//! The web layer deserializes submitted forms into [`CustomerForm`] and runs
//! [`validate`] before anything touches the store. Validation errors are
//! data, not exceptions: the function collects every applicable message so a
//! form can report all problems in one round trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Customer gender selection
///
/// Parsing is case-sensitive: `male` is rejected, `Male` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse from the exact form value, `None` for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// The persisted / displayed representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// All selectable values, in form display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid gender value: '{}'", s))
    }
}

/// A submitted customer form, exactly as the browser sent it
///
/// Fields default to empty strings so a missing input reports a validation
/// message instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub gender: String,
}

/// A validated, trimmed customer payload ready for the repository
///
/// Construct via `TryFrom<CustomerForm>`; the conversion runs the validator,
/// so the repository never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub location: String,
    pub gender: Gender,
}

/// Check a submitted form and collect every applicable error message
///
/// Rules are evaluated independently, never short-circuited:
/// - first and last name: present and at least 2 characters after trimming
/// - email: contains `@` (deliberately weak, not RFC-compliant)
/// - location: present (no trimming on the check)
/// - gender: exactly one of `Male`, `Female`, `Other`
///
/// An empty vector means the form is valid. Pure function, no side effects.
pub fn validate(form: &CustomerForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.first_name.trim().chars().count() < 2 {
        errors.push("First name must be at least 2 characters".to_string());
    }

    if form.last_name.trim().chars().count() < 2 {
        errors.push("Last name must be at least 2 characters".to_string());
    }

    if !form.email.contains('@') {
        errors.push("Valid email is required".to_string());
    }

    if form.location.is_empty() {
        errors.push("Location is required".to_string());
    }

    if Gender::parse(&form.gender).is_none() {
        errors.push("Valid gender selection is required".to_string());
    }

    errors
}

impl TryFrom<CustomerForm> for CustomerFields {
    type Error = Vec<String>;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        let errors = validate(&form);
        if !errors.is_empty() {
            return Err(errors);
        }

        let gender = Gender::parse(&form.gender)
            .ok_or_else(|| vec!["Valid gender selection is required".to_string()])?;

        Ok(CustomerFields {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            location: form.location.trim().to_string(),
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CustomerForm {
        CustomerForm {
            first_name: "Jo".to_string(),
            last_name: "Li".to_string(),
            email: "jo@x.com".to_string(),
            location: "NY".to_string(),
            gender: "Other".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_short_names_rejected() {
        let mut form = valid_form();
        form.first_name = "J".to_string();
        form.last_name = " L ".to_string();

        let errors = validate(&form);
        assert!(errors.contains(&"First name must be at least 2 characters".to_string()));
        assert!(errors.contains(&"Last name must be at least 2 characters".to_string()));
    }

    #[test]
    fn test_whitespace_padding_does_not_satisfy_length() {
        let mut form = valid_form();
        form.first_name = "  J  ".to_string();

        let errors = validate(&form);
        assert_eq!(
            errors,
            vec!["First name must be at least 2 characters".to_string()]
        );
    }

    #[test]
    fn test_email_requires_at_sign() {
        let mut form = valid_form();
        form.email = "jo.example.com".to_string();

        assert_eq!(validate(&form), vec!["Valid email is required".to_string()]);
    }

    #[test]
    fn test_gender_is_case_sensitive() {
        let mut form = valid_form();
        form.gender = "male".to_string();

        assert_eq!(
            validate(&form),
            vec!["Valid gender selection is required".to_string()]
        );
    }

    #[test]
    fn test_all_errors_collected_in_one_call() {
        let form = CustomerForm {
            first_name: "J".to_string(),
            ..Default::default()
        };

        let errors = validate(&form);
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&"First name must be at least 2 characters".to_string()));
        assert!(errors.contains(&"Last name must be at least 2 characters".to_string()));
        assert!(errors.contains(&"Valid email is required".to_string()));
        assert!(errors.contains(&"Location is required".to_string()));
        assert!(errors.contains(&"Valid gender selection is required".to_string()));
    }

    #[test]
    fn test_try_from_trims_fields() {
        let form = CustomerForm {
            first_name: "  Jo ".to_string(),
            last_name: " Li ".to_string(),
            email: " jo@x.com ".to_string(),
            location: "NY".to_string(),
            gender: "Other".to_string(),
        };

        let fields = CustomerFields::try_from(form).unwrap();
        assert_eq!(fields.first_name, "Jo");
        assert_eq!(fields.last_name, "Li");
        assert_eq!(fields.email, "jo@x.com");
        assert_eq!(fields.gender, Gender::Other);
    }

    #[test]
    fn test_try_from_invalid_returns_messages() {
        let errors = CustomerFields::try_from(CustomerForm::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_gender_parse_and_display() {
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("female"), None);
        assert_eq!(Gender::parse(""), None);
        assert_eq!("Male".parse::<Gender>().unwrap().to_string(), "Male");
        assert!("Unknown".parse::<Gender>().is_err());
    }
}
