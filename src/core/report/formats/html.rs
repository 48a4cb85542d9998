//! HTML report generator
//!
//! Renders a self-contained page through an askama template. All record text
//! is HTML-escaped by the template engine.

use crate::core::models::CourseRecommendation;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// One recommendation, flattened to display strings
struct Card<'a> {
    number: String,
    label: String,
    rating: String,
    explanation: &'a str,
    prerequisites: &'a str,
    extra: Vec<(&'a str, &'a str)>,
}

impl<'a> Card<'a> {
    fn from_record(idx: usize, record: &'a CourseRecommendation) -> Self {
        Self {
            number: record
                .number
                .map_or_else(|| (idx + 1).to_string(), |n| n.to_string()),
            label: record.label(),
            rating: record
                .rating
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
            explanation: record.explanation.as_deref().unwrap_or(""),
            prerequisites: record.prerequisites.as_deref().unwrap_or("-"),
            extra: record
                .extra
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "recommendations.html")]
struct RecommendationsPage<'a> {
    job_name: &'a str,
    degree_name: &'a str,
    version: &'a str,
    cards: Vec<Card<'a>>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = RecommendationsPage {
            job_name: ctx.job_label(),
            degree_name: ctx.degree_label(),
            version: crate::core::get_version(),
            cards: ctx
                .records
                .iter()
                .enumerate()
                .map(|(idx, record)| Card::from_record(idx, record))
                .collect(),
        };
        Ok(page.render()?)
    }
}
