use std::sync::Arc;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::{EntityId, EXPORT_FILE_STEM, MALE_GENDER},
    export::{ExportError, ExportFile, ExportFormat, TabularEncoder},
    model::{form::PersonForm, person::Person},
    store::store::PersonStore,
};

use super::{
    birth_year::BirthYearOption,
    validation::{PersonValidator, RequiredFieldsValidator},
};

/// Where the caller should go once a workflow has run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Navigation {
    Listing,
    /// Carries the deleted record's full name for the confirmation view
    ConfirmDelete { person_name: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PagedView {
    pub persons: Vec<Person>,
    /// Only present when the page is non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_page: Option<u64>,
}

/// Filtered views and workflows over an injected [`PersonStore`]
pub struct RookiesController {
    store: Arc<dyn PersonStore>,
    validator: Arc<dyn PersonValidator>,
}

impl RookiesController {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self::with_validator(store, Arc::new(RequiredFieldsValidator))
    }

    pub fn with_validator(store: Arc<dyn PersonStore>, validator: Arc<dyn PersonValidator>) -> Self {
        Self { store, validator }
    }

    pub fn index(&self, page: i64, page_size: i64) -> PagedView {
        let response = self.store.list(Some(page), Some(page_size));

        let count_page = match (response.persons.is_empty(), u64::try_from(page_size)) {
            (false, Ok(page_size)) if page_size > 0 => {
                Some((response.count_total as u64).div_ceil(page_size))
            }
            _ => None,
        };

        PagedView {
            persons: response.persons,
            count_page,
        }
    }

    pub fn details(&self, id: &EntityId) -> Option<Person> {
        self.store.find(id)
    }

    /// Record used to populate the edit form
    pub fn edit_view(&self, id: &EntityId) -> Option<Person> {
        self.store.list_all().into_iter().find(|p| &p.id == id)
    }

    /// Record shown on the delete prompt
    pub fn delete_view(&self, id: &EntityId) -> Option<Person> {
        self.store.list_all().into_iter().find(|p| &p.id == id)
    }

    /// Every record tied for the greatest age in `current_year`
    pub fn oldest_members(&self, current_year: i32) -> Vec<Person> {
        let persons = self.store.list_all();

        let Some(max_age) = persons.iter().map(|p| p.age_in(current_year)).max() else {
            return persons;
        };

        persons
            .into_iter()
            .filter(|p| p.age_in(current_year) == max_age)
            .collect()
    }

    pub fn oldest_members_now(&self) -> Vec<Person> {
        self.oldest_members(Local::now().year())
    }

    /// Case-sensitive, "male" is not a match
    pub fn male_members(&self) -> Vec<Person> {
        self.store
            .list_all()
            .into_iter()
            .filter(|p| p.gender == MALE_GENDER)
            .collect()
    }

    pub fn birth_year(&self, option: &str) -> BirthYearOption {
        BirthYearOption::route(option)
    }

    pub fn born(&self, option: BirthYearOption) -> Vec<Person> {
        self.store
            .list_all()
            .into_iter()
            .filter(|p| option.matches(p))
            .collect()
    }

    pub fn older(&self) -> Vec<Person> {
        self.born(BirthYearOption::Older)
    }

    pub fn younger(&self) -> Vec<Person> {
        self.born(BirthYearOption::Younger)
    }

    pub fn equal(&self) -> Vec<Person> {
        self.born(BirthYearOption::Equal)
    }

    pub fn full_names(&self) -> Vec<String> {
        self.store.list_all().iter().map(Person::full_name).collect()
    }

    pub fn create(&self, form: PersonForm) -> Navigation {
        let outcome = self.validator.validate(&form);

        if !outcome.is_valid() {
            log::info!("Rejected create: {} invalid field(s)", outcome.errors.len());
            return Navigation::Listing;
        }

        // The submitted id is never trusted, every new record gets a fresh one
        if let Some(person) = form.into_person(EntityId::new()) {
            let id = person.id;

            if self.store.create(person) {
                log::info!("Created person: {}", id);
            }
        }

        Navigation::Listing
    }

    pub fn edit(&self, form: PersonForm) -> Navigation {
        let outcome = self.validator.validate(&form);

        if !outcome.is_valid() {
            log::info!("Rejected edit: {} invalid field(s)", outcome.errors.len());
            return Navigation::Listing;
        }

        let Some(id) = form.id else {
            log::info!("Rejected edit: no id");
            return Navigation::Listing;
        };

        if let Some(person) = form.into_person(id) {
            if self.store.edit(person) {
                log::info!("Edited person: {}", id);
            }
        }

        Navigation::Listing
    }

    pub fn delete_person(&self, id: &EntityId) -> Navigation {
        match self.store.find(id) {
            Some(person) => {
                self.store.delete(&person);
                log::info!("Deleted person: {}", id);

                Navigation::ConfirmDelete {
                    person_name: person.full_name(),
                }
            }
            None => Navigation::Listing,
        }
    }

    pub fn export(&self, format: ExportFormat) -> Result<ExportFile, ExportError> {
        self.export_with(format.encoder().as_ref())
    }

    /// Hands the complete, unfiltered listing to `encoder`
    pub fn export_with(&self, encoder: &dyn TabularEncoder) -> Result<ExportFile, ExportError> {
        let persons = self.store.list_all();

        let bytes = encoder.encode(&persons)?;

        log::info!("Exported {} person(s) as {}", persons.len(), encoder.extension());

        Ok(ExportFile {
            file_name: format!("{}.{}", EXPORT_FILE_STEM, encoder.extension()),
            content_type: encoder.content_type(),
            bytes,
        })
    }
}
