use serde::{Deserialize, Serialize};

use super::person::Person;

/// A page of the store plus the size of the whole store
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PaginatedPersonList {
    pub persons: Vec<Person>,
    /// Size of the full collection, not of `persons`
    pub count_total: usize,
}
