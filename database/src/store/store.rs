use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    consts::consts::EntityId,
    model::{paginated::PaginatedPersonList, person::Person},
};

use super::{options::StoreOptions, query::paginate};

/// Capability interface over the person records.
///
/// None of the mutations fail: a duplicate id on create, or a missing id on
/// edit / delete, is a silent no-op. The returned flag only reports whether the
/// store changed.
pub trait PersonStore: Send + Sync {
    fn list(&self, page: Option<i64>, page_size: Option<i64>) -> PaginatedPersonList;

    /// Appends `person` unless a record already has its id
    fn create(&self, person: Person) -> bool;

    /// Overwrites every field but the id of the record sharing `person`'s id
    fn edit(&self, person: Person) -> bool;

    /// Removes the record with `person`'s id
    fn delete(&self, person: &Person) -> bool;

    fn find(&self, id: &EntityId) -> Option<Person>;

    /// Every record, in store order
    fn list_all(&self) -> Vec<Person> {
        self.list(None, None).persons
    }
}

pub struct InMemoryPersonStore {
    // All mutations go through this single lock
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    pub fn new(options: StoreOptions) -> Self {
        let persons = match options.seed {
            true => vec![Person::new_seed()],
            false => vec![],
        };

        Self::from_persons(persons)
    }

    pub fn from_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written, so a
    // poisoned lock is still safe to use
    fn read(&self) -> RwLockReadGuard<'_, Vec<Person>> {
        self.persons.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Person>> {
        self.persons.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
impl InMemoryPersonStore {
    pub fn new_test() -> Self {
        Self::new(StoreOptions::new_test())
    }
}

impl Default for InMemoryPersonStore {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

impl PersonStore for InMemoryPersonStore {
    #[tracing::instrument(skip(self))]
    fn list(&self, page: Option<i64>, page_size: Option<i64>) -> PaginatedPersonList {
        paginate(&self.read(), page, page_size)
    }

    #[tracing::instrument(skip(self))]
    fn create(&self, person: Person) -> bool {
        let mut persons = self.write();

        if persons.iter().any(|p| p.id == person.id) {
            log::debug!("Skipped create, record already exists: {}", person.id);
            return false;
        }

        persons.push(person);

        true
    }

    #[tracing::instrument(skip(self))]
    fn edit(&self, person: Person) -> bool {
        let mut persons = self.write();

        let Some(existing) = persons.iter_mut().find(|p| p.id == person.id) else {
            log::debug!("Skipped edit, record does not exist: {}", person.id);
            return false;
        };

        let Person {
            id: _,
            first_name,
            last_name,
            gender,
            date_of_birth,
            phone_number,
            birth_place,
            is_graduated,
        } = person;

        existing.first_name = first_name;
        existing.last_name = last_name;
        existing.gender = gender;
        existing.date_of_birth = date_of_birth;
        existing.phone_number = phone_number;
        existing.birth_place = birth_place;
        existing.is_graduated = is_graduated;

        true
    }

    #[tracing::instrument(skip(self))]
    fn delete(&self, person: &Person) -> bool {
        let mut persons = self.write();

        match persons.iter().position(|p| p.id == person.id) {
            Some(index) => {
                persons.remove(index);
                true
            }
            None => {
                log::debug!("Skipped delete, record does not exist: {}", person.id);
                false
            }
        }
    }

    #[tracing::instrument(skip(self))]
    fn find(&self, id: &EntityId) -> Option<Person> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }
}
