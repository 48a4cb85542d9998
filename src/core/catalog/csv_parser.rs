//! CSV parser for degree elective catalogs
//!
//! Rows carry no header and follow a fixed column order:
//! `Prereq1, Prereq2, Prereq3, Course Code, Units, Course Name, Description`.
//! Descriptions are usually quoted because they contain commas.

use super::CatalogError;
use crate::core::models::Elective;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::path::Path;

/// Number of columns in a catalog row
pub const COLUMN_COUNT: usize = 7;

const PREREQ_COLUMNS: std::ops::Range<usize> = 0..3;
const CODE_COLUMN: usize = 3;
const UNITS_COLUMN: usize = 4;
const NAME_COLUMN: usize = 5;
const DESCRIPTION_COLUMN: usize = 6;

/// Parse an elective catalog file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or the CSV is malformed
pub fn load_electives<P: AsRef<Path>>(path: P) -> Result<Vec<Elective>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_electives_csv(&content)
}

/// Parse elective rows from CSV text
///
/// Short rows are padded and long rows truncated to [`COLUMN_COUNT`] columns.
/// Blank rows are skipped. Units that are blank or not an integer become `None`.
///
/// # Errors
/// Returns an error if the CSV cannot be tokenized (e.g. invalid UTF-8)
pub fn parse_electives_csv(text: &str) -> Result<Vec<Elective>, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut electives = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| CatalogError::Csv {
            row: idx + 1,
            source,
        })?;
        if is_blank(&record) {
            continue;
        }
        electives.push(parse_row(&record));
    }
    Ok(electives)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Build an elective from one row, normalized to the fixed column layout
fn parse_row(record: &StringRecord) -> Elective {
    let column = |idx: usize| record.get(idx).map_or("", str::trim);

    let units = match column(UNITS_COLUMN) {
        "" => None,
        raw => raw.parse::<u32>().ok(),
    };

    let mut elective = Elective::new(
        column(CODE_COLUMN).to_string(),
        column(NAME_COLUMN).to_string(),
        units,
    );
    for idx in PREREQ_COLUMNS {
        elective.add_prerequisite(column(idx));
    }
    elective.description = column(DESCRIPTION_COLUMN).to_string();
    elective
}
