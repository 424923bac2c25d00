use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_RECORDS_PER_PAGE: i64 = 2;

/// Birth year the older / younger / equal views are split on
pub const PIVOT_BIRTH_YEAR: i32 = 2000;

/// Exact (case-sensitive) gender value matched by the male members view
pub const MALE_GENDER: &str = "Male";

pub const EXPORT_FILE_STEM: &str = "PersonRecords";
