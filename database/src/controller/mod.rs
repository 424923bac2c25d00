pub mod birth_year;
pub mod rookies;
pub mod validation;
