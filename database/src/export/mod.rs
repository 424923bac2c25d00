use std::str::FromStr;

use strum::VariantNames as _;
use strum_macros::{Display, EnumString, VariantNames};
use thiserror::Error;

use crate::model::person::Person;

pub mod csv;
pub mod xlsx;

pub use self::csv::CsvEncoder;
pub use self::xlsx::XlsxEncoder;

/// Column headers, one per Person field in declaration order
pub const COLUMNS: [&str; 8] = [
    "Id",
    "First Name",
    "Last Name",
    "Gender",
    "Date Of Birth",
    "Phone Number",
    "Birth Place",
    "Is Graduated",
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot write spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error(
        "Unsupported export format: {0}, expected one of: {supported}",
        supported = ExportFormat::VARIANTS.join(", ")
    )]
    UnsupportedFormat(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn parse(format: &str) -> Result<Self, ExportError> {
        ExportFormat::from_str(format)
            .map_err(|_| ExportError::UnsupportedFormat(format.to_string()))
    }

    pub fn encoder(self) -> Box<dyn TabularEncoder> {
        match self {
            ExportFormat::Xlsx => Box::new(XlsxEncoder),
            ExportFormat::Csv => Box::new(CsvEncoder),
        }
    }
}

/// Turns a record sequence into a downloadable table, header row first
pub trait TabularEncoder: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn encode(&self, persons: &[Person]) -> Result<Vec<u8>, ExportError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Text form of each column for `person`, aligned with [`COLUMNS`]
pub fn row_values(person: &Person) -> [String; 8] {
    [
        person.id.to_string(),
        person.first_name.clone(),
        person.last_name.clone(),
        person.gender.clone(),
        person.date_of_birth.format(DATE_FORMAT).to_string(),
        person.phone_number.clone(),
        person.birth_place.clone(),
        person.is_graduated.to_string(),
    ]
}
