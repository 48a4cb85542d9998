//! Degree elective catalog loading and lookup

pub mod csv_parser;

pub use csv_parser::{load_electives, parse_electives_csv};

use crate::core::models::Elective;
use thiserror::Error;

/// Errors raised while loading an elective catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Cannot read catalog '{path}': {source}")]
    Read {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The CSV could not be tokenized
    #[error("Malformed catalog row {row}: {source}")]
    Csv {
        /// 1-based row index
        row: usize,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },
}

/// Normalize a course code for comparison
///
/// Handles cases like "CPSC 483", "cpsc483", "CPSC  483 (lab)".
#[must_use]
pub fn normalize_course_code(input: &str) -> String {
    let cleaned = input.split('(').next().unwrap_or(input);
    cleaned
        .split_whitespace()
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Find the catalog entry for a course code, ignoring spacing and case
#[must_use]
pub fn find_elective<'a>(electives: &'a [Elective], course_code: &str) -> Option<&'a Elective> {
    let wanted = normalize_course_code(course_code);
    if wanted.is_empty() {
        return None;
    }
    electives
        .iter()
        .find(|e| normalize_course_code(&e.course_code) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_course_code() {
        assert_eq!(normalize_course_code("CPSC 483"), "CPSC483");
        assert_eq!(normalize_course_code("cpsc483"), "CPSC483");
        assert_eq!(normalize_course_code("  MATH  270B  "), "MATH270B");
        assert_eq!(normalize_course_code("CPSC 484 (lab)"), "CPSC484");
        assert_eq!(normalize_course_code(""), "");
    }

    #[test]
    fn test_find_elective_ignores_spacing_and_case() {
        let electives = vec![
            Elective::new("CPSC 483".to_string(), "Machine Learning".to_string(), Some(3)),
            Elective::new("CPSC 452".to_string(), "Cryptography".to_string(), Some(3)),
        ];

        let found = find_elective(&electives, "cpsc452").map(|e| e.course_name.as_str());
        assert_eq!(found, Some("Cryptography"));
        assert!(find_elective(&electives, "CPSC 999").is_none());
        assert!(find_elective(&electives, "  ").is_none());
    }
}
