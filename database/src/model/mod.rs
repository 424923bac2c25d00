pub mod form;
pub mod paginated;
pub mod person;
