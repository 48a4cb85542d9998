//! Degree elective model

use serde::{Deserialize, Serialize};

/// A catalog elective offered by a degree program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elective {
    /// Prerequisite expressions (e.g., "CPSC 351 or CPSC 353"), blanks removed
    pub prerequisites: Vec<String>,

    /// Course code (e.g., "CPSC 483")
    pub course_code: String,

    /// Units; `None` when the catalog leaves it blank or non-numeric
    pub units: Option<u32>,

    /// Course name (e.g., "Introduction to Machine Learning")
    pub course_name: String,

    /// Catalog description
    pub description: String,
}

impl Elective {
    /// Create a new elective with no prerequisites
    ///
    /// # Arguments
    /// * `course_code` - Course code
    /// * `course_name` - Course name
    /// * `units` - Units, if known
    #[must_use]
    pub const fn new(course_code: String, course_name: String, units: Option<u32>) -> Self {
        Self {
            prerequisites: Vec::new(),
            course_code,
            units,
            course_name,
            description: String::new(),
        }
    }

    /// Add a prerequisite expression, ignoring blanks and duplicates
    pub fn add_prerequisite(&mut self, prereq: &str) {
        let trimmed = prereq.trim();
        if !trimmed.is_empty() && !self.prerequisites.iter().any(|p| p == trimmed) {
            self.prerequisites.push(trimmed.to_string());
        }
    }

    /// Prerequisites joined for display, or "None"
    #[must_use]
    pub fn prerequisites_label(&self) -> String {
        if self.prerequisites.is_empty() {
            "None".to_string()
        } else {
            self.prerequisites.join(", ")
        }
    }
}
