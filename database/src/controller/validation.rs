use serde::{Deserialize, Serialize};

use crate::model::form::PersonForm;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ValidationOutcome {
    pub errors: Vec<FieldError>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn require(&mut self, field: &str, present: bool) {
        if !present {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: format!("The {} field is required.", field),
            });
        }
    }
}

/// Checks a candidate record before it is created or edited
pub trait PersonValidator: Send + Sync {
    fn validate(&self, form: &PersonForm) -> ValidationOutcome;
}

/// Every text field must be non-blank and the date of birth present
#[derive(Clone, Copy, Debug, Default)]
pub struct RequiredFieldsValidator;

impl PersonValidator for RequiredFieldsValidator {
    fn validate(&self, form: &PersonForm) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::default();

        outcome.require("first_name", !form.first_name.trim().is_empty());
        outcome.require("last_name", !form.last_name.trim().is_empty());
        outcome.require("gender", !form.gender.trim().is_empty());
        outcome.require("date_of_birth", form.date_of_birth.is_some());
        outcome.require("phone_number", !form.phone_number.trim().is_empty());
        outcome.require("birth_place", !form.birth_place.trim().is_empty());

        outcome
    }
}

#[cfg(test)]
mod tests {
    use crate::model::person::Person;

    use super::*;

    #[test]
    fn complete_form_is_valid() {
        let form = PersonForm::from(Person::new_test("John", "Doe", "Male", 1990));

        assert!(RequiredFieldsValidator.validate(&form).is_valid());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let outcome = RequiredFieldsValidator.validate(&PersonForm::default());

        let fields: Vec<&str> = outcome.errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(
            fields,
            vec![
                "first_name",
                "last_name",
                "gender",
                "date_of_birth",
                "phone_number",
                "birth_place"
            ]
        );
    }

    #[test]
    fn whitespace_only_is_blank() {
        let mut form = PersonForm::from(Person::new_test("John", "Doe", "Male", 1990));
        form.last_name = "   ".to_string();

        let outcome = RequiredFieldsValidator.validate(&form);

        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.errors,
            vec![FieldError {
                field: "last_name".to_string(),
                message: "The last_name field is required.".to_string(),
            }]
        );
    }
}
