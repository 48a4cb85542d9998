//! Recommendation text parser
//!
//! Turns the text an AI model returns for the recommendation template
//! (`**Number:** 1`, `**Course Code:** ...`, ...) into [`CourseRecommendation`]
//! records. Parsing is pure: no I/O and no state shared between calls.
//!
//! ```
//! use elective_advisor::parser::{filter_relevant_lines, parse_records};
//!
//! let raw = "**Number:** 1\n**Course Code:** CPSC 483\n**Rating:** 95\n";
//! let records = parse_records(filter_relevant_lines(raw)).unwrap();
//! assert_eq!(records[0].course_code.as_deref(), Some("CPSC 483"));
//! ```

pub mod line_filter;
pub mod record_builder;

pub use line_filter::filter_relevant_lines;
pub use record_builder::{parse_field, RecordBuilder};

use crate::core::models::CourseRecommendation;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while building records.
///
/// Everything else the template can throw at the parser (odd ratings, missing
/// or unknown fields, empty input) is absorbed into the returned records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A `Number` field whose value is not an integer
    #[error("line {line}: Number must be an integer, got '{value}'")]
    InvalidNumber {
        /// 1-based position among the lines handed to the builder
        line: usize,
        /// The offending value
        value: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Build records from template lines, in the order their `Number` fields appear.
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] when a `Number` field is not an integer.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<CourseRecommendation>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = RecordBuilder::new();
    for line in lines {
        builder.feed(line.as_ref())?;
    }
    Ok(builder.finish())
}

/// Filter `raw_text` and build its records in one step.
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] when a `Number` field is not an integer.
pub fn parse_recommendations(raw_text: &str) -> Result<Vec<CourseRecommendation>, ParseError> {
    parse_records(filter_relevant_lines(raw_text))
}
