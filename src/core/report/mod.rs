//! Report generation for parsed recommendations
//!
//! Renders a recommendation list as Markdown, HTML or JSON.

pub mod formats;

use crate::core::models::CourseRecommendation;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};

/// Shown in report headers when the job or degree is unknown
const UNSPECIFIED: &str = "Unspecified";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Target job title; empty when unknown
    pub job_name: &'a str,
    /// Degree or program name; empty when unknown
    pub degree_name: &'a str,
    /// Records in the order they were parsed
    pub records: &'a [CourseRecommendation],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        job_name: &'a str,
        degree_name: &'a str,
        records: &'a [CourseRecommendation],
    ) -> Self {
        Self {
            job_name,
            degree_name,
            records,
        }
    }

    /// Job title for headings
    #[must_use]
    pub fn job_label(&self) -> &str {
        non_empty_or_unspecified(self.job_name)
    }

    /// Degree name for headings
    #[must_use]
    pub fn degree_label(&self) -> &str {
        non_empty_or_unspecified(self.degree_name)
    }

    /// Number of records
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.records.len()
    }
}

fn non_empty_or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        UNSPECIFIED
    } else {
        value
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
