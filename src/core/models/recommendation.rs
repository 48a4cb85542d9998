//! Course recommendation model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Literal field names used by the recommendation template
pub mod keys {
    /// Sequence number; starts a new record
    pub const NUMBER: &str = "Number";
    /// Course code (e.g., "CPSC 483")
    pub const COURSE_CODE: &str = "Course Code";
    /// Course title
    pub const COURSE_NAME: &str = "Course Name";
    /// Fit rating, usually 0-100
    pub const RATING: &str = "Rating";
    /// Multi-line rationale
    pub const EXPLANATION: &str = "Explanation";
    /// Free-text prerequisite list
    pub const PREREQUISITES: &str = "Prerequisites";
}

/// Rating of a recommendation.
///
/// Numeric ratings are kept as integers; anything else (e.g. "N/A") is kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    /// Integer rating
    Score(i64),
    /// Non-numeric rating text
    Text(String),
}

impl Rating {
    /// Coerce a raw rating value, falling back to the original text
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Text(raw.to_string()), Self::Score)
    }

    /// Integer value, if the rating was numeric
    #[must_use]
    pub const fn score(&self) -> Option<i64> {
        match self {
            Self::Score(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One parsed course recommendation.
///
/// Well-known template fields get typed slots; any other `**Key:** value`
/// pair lands in `extra` under its literal key. Serializes with the template's
/// field names so a record list round-trips through the JSON payload format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    /// Sequence number from the source text
    #[serde(rename = "Number", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,

    /// Course code (e.g., "CPSC 483")
    #[serde(
        rename = "Course Code",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub course_code: Option<String>,

    /// Course name (e.g., "Introduction to Machine Learning")
    #[serde(
        rename = "Course Name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub course_name: Option<String>,

    /// Rating, numeric when possible
    #[serde(
        rename = "Rating",
        default,
        deserialize_with = "deserialize_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Rating>,

    /// Explanation with continuation lines joined by single spaces
    #[serde(
        rename = "Explanation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub explanation: Option<String>,

    /// Prerequisites text, may be "None"
    #[serde(
        rename = "Prerequisites",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prerequisites: Option<String>,

    /// Unrecognized fields keyed by their literal name
    #[serde(flatten, deserialize_with = "deserialize_extra")]
    pub extra: BTreeMap<String, String>,
}

/// Numeric strings become scores, matching the template path
fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let rating = Option::<Rating>::deserialize(deserializer)?;
    Ok(rating.map(|rating| match rating {
        Rating::Text(text) => Rating::parse(text.trim()),
        score @ Rating::Score(_) => score,
    }))
}

/// Non-string values are kept as their JSON text; nulls are dropped
fn deserialize_extra<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

impl CourseRecommendation {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has been set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.course_code.is_none()
            && self.course_name.is_none()
            && self.rating.is_none()
            && self.explanation.is_none()
            && self.prerequisites.is_none()
            && self.extra.is_empty()
    }

    /// Look up a field by its literal template name.
    ///
    /// Typed fields are rendered back to text, so `field("Number")` yields
    /// `Some("3")` for record number 3.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            keys::NUMBER => self.number.map(|n| n.to_string()),
            keys::COURSE_CODE => self.course_code.clone(),
            keys::COURSE_NAME => self.course_name.clone(),
            keys::RATING => self.rating.as_ref().map(ToString::to_string),
            keys::EXPLANATION => self.explanation.clone(),
            keys::PREREQUISITES => self.prerequisites.clone(),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// True when the record carries a value for `key`
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        match key {
            keys::NUMBER => self.number.is_some(),
            keys::COURSE_CODE => self.course_code.is_some(),
            keys::COURSE_NAME => self.course_name.is_some(),
            keys::RATING => self.rating.is_some(),
            keys::EXPLANATION => self.explanation.is_some(),
            keys::PREREQUISITES => self.prerequisites.is_some(),
            _ => self.extra.contains_key(key),
        }
    }

    /// Store a non-`Number` field value, overwriting any earlier value.
    ///
    /// `Rating` is coerced; every other key is stored verbatim. `Number` is
    /// coerced by the parser and never passes through here.
    pub(crate) fn set_text_field(&mut self, key: &str, value: String) {
        match key {
            keys::COURSE_CODE => self.course_code = Some(value),
            keys::COURSE_NAME => self.course_name = Some(value),
            keys::RATING => self.rating = Some(Rating::parse(&value)),
            keys::EXPLANATION => self.explanation = Some(value),
            keys::PREREQUISITES => self.prerequisites = Some(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Short label like "CPSC 483 - Introduction to Machine Learning"
    #[must_use]
    pub fn label(&self) -> String {
        match (self.course_code.as_deref(), self.course_name.as_deref()) {
            (Some(code), Some(name)) => format!("{code} - {name}"),
            (Some(code), None) => code.to_string(),
            (None, Some(name)) => name.to_string(),
            (None, None) => "(unnamed course)".to_string(),
        }
    }
}
