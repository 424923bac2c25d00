use crate::model::person::Person;

use super::{row_values, ExportError, TabularEncoder, COLUMNS};

pub struct CsvEncoder;

impl TabularEncoder for CsvEncoder {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn encode(&self, persons: &[Person]) -> Result<Vec<u8>, ExportError> {
        let mut csv = String::new();

        csv.push_str(&COLUMNS.join(","));
        csv.push('\n');

        for person in persons {
            let row: Vec<String> = row_values(person)
                .iter()
                .map(|value| escape_csv_field(value))
                .collect();

            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        Ok(csv.into_bytes())
    }
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_then_one_line_per_record() {
        let people = vec![
            Person::new_test("John", "Doe", "Male", 1990),
            Person::new_test("Jane", "Doe", "Female", 2001),
        ];

        let bytes = CsvEncoder.encode(&people).unwrap();
        let csv = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Id,First Name,Last Name,Gender,Date Of Birth,Phone Number,Birth Place,Is Graduated"
        );
        assert_eq!(
            lines[2],
            format!(
                "{},Jane,Doe,Female,2001-06-15,0123456789,Ha Noi,false",
                people[1].id
            )
        );
    }

    #[test]
    fn empty_listing_is_only_the_header() {
        let csv = String::from_utf8(CsvEncoder.encode(&[]).unwrap()).unwrap();

        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn escapes_fields() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("Ho Chi Minh, VN"), "\"Ho Chi Minh, VN\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field("with\nnewline"), "\"with\nnewline\"");
    }
}
