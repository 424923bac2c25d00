use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

use crate::{consts::consts::PIVOT_BIRTH_YEAR, model::person::Person};

/// Which side of the pivot birth year a view selects
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BirthYearOption {
    /// Born after the pivot year
    Older,
    /// Born before the pivot year
    Younger,
    Equal,
}

impl BirthYearOption {
    /// Unrecognized text falls back to `Equal`, it is never an error
    pub fn route(option: &str) -> Self {
        match option {
            "older" => BirthYearOption::Older,
            "younger" => BirthYearOption::Younger,
            _ => BirthYearOption::Equal,
        }
    }

    pub fn matches(&self, person: &Person) -> bool {
        let year = person.birth_year();

        match self {
            BirthYearOption::Older => year > PIVOT_BIRTH_YEAR,
            BirthYearOption::Younger => year < PIVOT_BIRTH_YEAR,
            BirthYearOption::Equal => year == PIVOT_BIRTH_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("older", BirthYearOption::Older)]
    #[case("younger", BirthYearOption::Younger)]
    #[case("equal", BirthYearOption::Equal)]
    #[case("abc", BirthYearOption::Equal)]
    #[case("", BirthYearOption::Equal)]
    #[case("Older", BirthYearOption::Equal)]
    fn routes_option_text(#[case] input: &str, #[case] expected: BirthYearOption) {
        assert_eq!(BirthYearOption::route(input), expected);
    }

    #[rstest]
    #[case(BirthYearOption::Older, 2001, true)]
    #[case(BirthYearOption::Older, 2000, false)]
    #[case(BirthYearOption::Younger, 1999, true)]
    #[case(BirthYearOption::Younger, 2000, false)]
    #[case(BirthYearOption::Equal, 2000, true)]
    #[case(BirthYearOption::Equal, 2001, false)]
    fn matches_birth_year(
        #[case] option: BirthYearOption,
        #[case] birth_year: i32,
        #[case] expected: bool,
    ) {
        let person = Person::new_test("John", "Doe", "Male", birth_year);

        assert_eq!(option.matches(&person), expected);
    }

    #[test]
    fn displays_as_route_segment() {
        assert_eq!(BirthYearOption::Older.to_string(), "older");
        assert_eq!(BirthYearOption::Younger.as_ref(), "younger");
    }
}
