//! Builds course recommendation records from template lines

use super::ParseError;
use crate::core::models::recommendation::keys;
use crate::core::models::CourseRecommendation;
use crate::debug;
use regex::Regex;
use std::sync::LazyLock;

/// `**Key:** value`, matched against a trimmed line
static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*(.+?):\*\*\s*(.*)$").expect("field pattern is a valid regex")
});

/// Split a `**Key:** value` line into its trimmed key and value
#[must_use]
pub fn parse_field(line: &str) -> Option<(&str, &str)> {
    let caps = FIELD_PATTERN.captures(line)?;
    let key = caps.get(1)?.as_str().trim();
    let value = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((key, value))
}

/// Which field the builder saw last. Only `Explanation` accepts continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastKey {
    Number,
    Explanation,
    Other,
}

/// Incremental record builder.
///
/// Feed it lines one at a time; a `Number` field flushes whatever record is in
/// progress and starts the next one. Call [`finish`](Self::finish) to flush the
/// last record and take the results.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    current: CourseRecommendation,
    last_key: Option<LastKey>,
    explanation: Vec<String>,
    records: Vec<CourseRecommendation>,
    lines_seen: usize,
}

impl RecordBuilder {
    /// Create a builder with no records
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidNumber`] when a `Number` field is not an integer.
    pub fn feed(&mut self, line: &str) -> Result<(), ParseError> {
        self.lines_seen += 1;
        let line = line.trim();
        match parse_field(line) {
            Some((key, value)) => self.apply_field(key, value),
            None => {
                self.continue_explanation(line);
                Ok(())
            }
        }
    }

    fn apply_field(&mut self, key: &str, value: &str) -> Result<(), ParseError> {
        match key {
            keys::NUMBER => {
                let number = value
                    .parse::<i64>()
                    .map_err(|source| ParseError::InvalidNumber {
                        line: self.lines_seen,
                        value: value.to_string(),
                        source,
                    })?;
                self.flush();
                self.current.number = Some(number);
                self.last_key = Some(LastKey::Number);
            }
            keys::EXPLANATION => {
                self.explanation.clear();
                self.explanation.push(value.to_string());
                self.current.set_text_field(key, value.to_string());
                self.last_key = Some(LastKey::Explanation);
            }
            _ => {
                self.current.set_text_field(key, value.to_string());
                self.last_key = Some(LastKey::Other);
            }
        }
        Ok(())
    }

    fn continue_explanation(&mut self, line: &str) {
        if self.last_key == Some(LastKey::Explanation) {
            self.explanation.push(line.to_string());
        } else {
            debug!("Discarding continuation line {}: {line}", self.lines_seen);
        }
    }

    /// True when a record is in progress
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.current.is_empty() || !self.explanation.is_empty()
    }

    /// Finalize the record in progress, if any. Returns `true` when a record was emitted.
    ///
    /// Pending explanation fragments are joined with single spaces and trimmed.
    pub fn flush(&mut self) -> bool {
        if !self.has_pending() {
            return false;
        }
        let mut record = std::mem::take(&mut self.current);
        if !self.explanation.is_empty() {
            record.explanation = Some(self.explanation.join(" ").trim().to_string());
            self.explanation.clear();
        }
        self.last_key = None;
        self.records.push(record);
        true
    }

    /// Records completed so far
    #[must_use]
    pub fn records(&self) -> &[CourseRecommendation] {
        &self.records
    }

    /// Flush the last record and return everything in input order
    #[must_use]
    pub fn finish(mut self) -> Vec<CourseRecommendation> {
        self.flush();
        self.records
    }
}
