//! Post-parse checks on recommendation records
//!
//! Parsing absorbs missing fields; these helpers let callers decide what a
//! complete answer looks like.

use crate::core::catalog::find_elective;
use crate::core::models::recommendation::keys;
use crate::core::models::{CourseRecommendation, Elective};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Fields every usable recommendation carries
pub const DEFAULT_REQUIRED_FIELDS: [&str; 2] = [keys::COURSE_CODE, keys::COURSE_NAME];

/// Upper bound on how many record numbers a caller may expect
pub const MAX_EXPECTED_RECORDS: i64 = 1000;

/// Required fields missing from one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// Position of the record in the parsed list
    pub index: usize,
    /// The record's `Number`, if it had one
    pub number: Option<i64>,
    /// Required keys the record lacks, in the order they were asked for
    pub missing: Vec<String>,
}

/// Keys from `required` that `record` has no value for
#[must_use]
pub fn missing_fields<S: AsRef<str>>(record: &CourseRecommendation, required: &[S]) -> Vec<String> {
    required
        .iter()
        .map(AsRef::as_ref)
        .filter(|key| !record.has_field(key))
        .map(str::to_string)
        .collect()
}

/// One issue per record that lacks any of `required`
#[must_use]
pub fn validate_required<S: AsRef<str>>(
    records: &[CourseRecommendation],
    required: &[S],
) -> Vec<RecordIssue> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let missing = missing_fields(record, required);
            (!missing.is_empty()).then(|| RecordIssue {
                index,
                number: record.number,
                missing,
            })
        })
        .collect()
}

/// Numbers in `expected` that no record carries, ascending.
///
/// At most [`MAX_EXPECTED_RECORDS`] numbers from the start of the range are
/// checked.
#[must_use]
pub fn missing_numbers(
    records: &[CourseRecommendation],
    expected: RangeInclusive<i64>,
) -> Vec<i64> {
    let present: BTreeSet<i64> = records.iter().filter_map(|r| r.number).collect();
    let (start, end) = expected.into_inner();
    let end = end.min(start.saturating_add(MAX_EXPECTED_RECORDS - 1));
    (start..=end).filter(|n| !present.contains(n)).collect()
}

/// Course codes recommended that do not appear in the elective catalog
#[must_use]
pub fn unknown_courses(records: &[CourseRecommendation], electives: &[Elective]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.course_code.as_deref())
        .filter(|code| find_elective(electives, code).is_none())
        .map(str::to_string)
        .collect()
}
