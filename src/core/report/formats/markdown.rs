//! Markdown report generator
//!
//! One section per recommendation. Renders well in GitHub, GitLab, and VS Code.

use crate::core::models::CourseRecommendation;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/recommendations.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{job_name}}", ctx.job_label());
        output = output.replace("{{degree_name}}", ctx.degree_label());
        output = output.replace("{{record_count}}", &ctx.record_count().to_string());
        output = output.replace("{{version}}", crate::core::get_version());

        let sections = Self::generate_sections(ctx);
        output = output.replace("{{recommendations}}", &sections);

        output
    }

    fn generate_sections(ctx: &ReportContext) -> String {
        if ctx.records.is_empty() {
            return "_No recommendations were found._\n".to_string();
        }
        let mut out = String::new();
        for (idx, record) in ctx.records.iter().enumerate() {
            Self::write_section(&mut out, idx, record);
        }
        out
    }

    fn write_section(out: &mut String, idx: usize, record: &CourseRecommendation) {
        let number = record
            .number
            .map_or_else(|| format!("{}", idx + 1), |n| n.to_string());
        let _ = writeln!(out, "## {number}. {}\n", record.label());

        let rating = record
            .rating
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        let _ = writeln!(out, "- **Rating:** {rating}");
        let _ = writeln!(
            out,
            "- **Prerequisites:** {}",
            record.prerequisites.as_deref().unwrap_or("-")
        );
        for (key, value) in &record.extra {
            let _ = writeln!(out, "- **{key}:** {value}");
        }

        if let Some(explanation) = record.explanation.as_deref() {
            let _ = writeln!(out, "\n{explanation}");
        }
        out.push('\n');
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
