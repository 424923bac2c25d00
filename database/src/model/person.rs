use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub birth_place: String,
    pub is_graduated: bool,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    pub fn birth_year(&self) -> i32 {
        self.date_of_birth.year()
    }

    /// Age in whole calendar years, ignoring month and day
    pub fn age_in(&self, current_year: i32) -> i32 {
        current_year - self.birth_year()
    }

    /// The record every fresh store starts with
    pub fn new_seed() -> Self {
        Person {
            id: EntityId::new(),
            first_name: "Huy1".to_string(),
            last_name: "Phuc1".to_string(),
            gender: "Female".to_string(),
            date_of_birth: Local::now().date_naive(),
            phone_number: "7329074222".to_string(),
            birth_place: "Ha Noi".to_string(),
            is_graduated: false,
        }
    }

    pub fn new_test(first_name: &str, last_name: &str, gender: &str, birth_year: i32) -> Self {
        Person {
            id: EntityId::new(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            gender: gender.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(birth_year, 6, 15)
                .unwrap_or(NaiveDate::MIN),
            phone_number: "0123456789".to_string(),
            birth_place: "Ha Noi".to_string(),
            is_graduated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_is_last_name_then_first_name() {
        let person = Person::new_test("John", "Doe", "Male", 1990);

        assert_eq!(person.full_name(), "Doe John");
    }

    #[test]
    fn age_only_looks_at_the_year() {
        let mut person = Person::new_test("John", "Doe", "Male", 1990);
        person.date_of_birth = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();

        assert_eq!(person.age_in(2024), 34);
    }

    #[test]
    fn seed_record_is_born_today() {
        let person = Person::new_seed();

        assert_eq!(person.full_name(), "Phuc1 Huy1");
        assert_eq!(person.date_of_birth, Local::now().date_naive());
        assert!(!person.is_graduated);
    }
}
