pub mod options;
pub mod query;
pub mod store;
