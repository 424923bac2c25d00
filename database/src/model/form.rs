use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

use super::person::Person;

/// Candidate record submitted to the create / edit workflows.
///
/// Every field defaults when missing so that incomplete input reaches the
/// validator rather than failing deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PersonForm {
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: String,
    pub birth_place: String,
    pub is_graduated: bool,
}

impl PersonForm {
    /// Builds the record under `id`, `None` when there is no date of birth
    pub fn into_person(self, id: EntityId) -> Option<Person> {
        let date_of_birth = self.date_of_birth?;

        Some(Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            date_of_birth,
            phone_number: self.phone_number,
            birth_place: self.birth_place,
            is_graduated: self.is_graduated,
        })
    }
}

impl From<Person> for PersonForm {
    fn from(person: Person) -> Self {
        PersonForm {
            id: Some(person.id),
            first_name: person.first_name,
            last_name: person.last_name,
            gender: person.gender,
            date_of_birth: Some(person.date_of_birth),
            phone_number: person.phone_number,
            birth_place: person.birth_place,
            is_graduated: person.is_graduated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let form: PersonForm = serde_json::from_str(r#"{ "first_name": "John" }"#).unwrap();

        assert_eq!(form.first_name, "John");
        assert_eq!(form.last_name, "");
        assert_eq!(form.date_of_birth, None);
        assert_eq!(form.id, None);
    }

    #[test]
    fn into_person_requires_a_date_of_birth() {
        let form = PersonForm {
            first_name: "John".to_string(),
            ..Default::default()
        };

        assert_eq!(form.into_person(EntityId::new()), None);
    }

    #[test]
    fn into_person_uses_the_given_id() {
        let person = Person::new_test("John", "Doe", "Male", 1990);
        let mut form = PersonForm::from(person.clone());
        form.id = Some(EntityId::new());

        let id = EntityId::new();
        let built = form.into_person(id).expect("has a date of birth");

        assert_eq!(built.id, id);
        assert_eq!(built.full_name(), person.full_name());
        assert_eq!(built.date_of_birth, person.date_of_birth);
    }
}
