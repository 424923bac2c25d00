use rust_xlsxwriter::{Format, Workbook};

use crate::model::person::Person;

use super::{row_values, ExportError, TabularEncoder, COLUMNS};

const SHEET_NAME: &str = "Sheet1";

/// Boolean column, written as a real spreadsheet boolean instead of text
const IS_GRADUATED_COLUMN: u16 = 7;

pub struct XlsxEncoder;

impl TabularEncoder for XlsxEncoder {
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn encode(&self, persons: &[Person]) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (column, header) in (0u16..).zip(COLUMNS) {
            worksheet.write_string_with_format(0, column, header, &header_format)?;
        }

        for (row, person) in (1u32..).zip(persons) {
            for (column, value) in (0u16..).zip(row_values(person)) {
                if column == IS_GRADUATED_COLUMN {
                    worksheet.write_boolean(row, column, person.is_graduated)?;
                } else {
                    worksheet.write_string(row, column, value)?;
                }
            }
        }

        worksheet.autofit();

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_zip_container() {
        let people = vec![
            Person::new_test("John", "Doe", "Male", 1990),
            Person::new_test("Jane", "Doe", "Female", 2001),
        ];

        let bytes = XlsxEncoder.encode(&people).unwrap();

        // Every xlsx file is a zip archive
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn empty_listing_still_encodes() {
        let bytes = XlsxEncoder.encode(&[]).unwrap();

        assert!(!bytes.is_empty());
    }
}
