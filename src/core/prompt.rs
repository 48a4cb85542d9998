//! Prompt construction for recommendation requests
//!
//! The response template spelled out here is exactly what
//! [`parse_recommendations`](crate::core::parser::parse_recommendations) reads back.

use crate::core::models::Elective;
use std::fmt::Write;

/// Default number of recommendations requested
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 10;

/// System prompt that pins the model to the field template
pub const RECOMMENDATION_SYSTEM: &str =
    "You are an academic advisor who matches degree electives to career goals. \
    Answer ONLY with recommendation blocks in the requested template. \
    Do NOT add introductions, summaries, or closing remarks.";

/// Recommendation prompt. Replace `{count}`, `{job_name}`, `{degree_name}` and
/// `{electives}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r"Recommend the {count} best electives for a student in the {degree_name} program who wants to work as a {job_name}.

Choose only from this elective list:
{electives}

For each recommendation, output one block in this EXACT format, numbered from 1 to {count}, best fit first:

**Number:** 1
**Course Code:** <course code from the list>
**Course Name:** <course name from the list>
**Rating:** <integer from 0 to 100 describing fit for the job>
**Explanation:** <why this course helps with the job, on a single line>
**Prerequisites:** <prerequisites from the list, or None>

Rules:
- Every field line starts with its bold label, exactly as shown.
- Keep each field on one line; do not wrap text onto unlabeled lines.
- Do not recommend the same course twice.
- Do not add fields that are not in the template.";

/// Inputs for a recommendation prompt
#[derive(Debug, Clone)]
pub struct PromptRequest<'a> {
    /// Target job title (e.g., "Web Developer")
    pub job_name: &'a str,
    /// Degree or program name
    pub degree_name: &'a str,
    /// Electives the model may choose from
    pub electives: &'a [Elective],
    /// Number of recommendations to ask for
    pub count: usize,
}

/// Render the user prompt for a recommendation request
#[must_use]
pub fn build_prompt(request: &PromptRequest<'_>) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{count}", &request.count.to_string())
        .replace("{job_name}", request.job_name)
        .replace("{degree_name}", request.degree_name)
        .replace("{electives}", &format_electives(request.electives))
}

/// One line per elective: `- CODE - Name (units, prereqs: ...): description`
fn format_electives(electives: &[Elective]) -> String {
    if electives.is_empty() {
        return "- (no electives provided)".to_string();
    }
    let mut out = String::new();
    for elective in electives {
        let units = elective
            .units
            .map_or_else(|| "units unknown".to_string(), |u| format!("{u} units"));
        let _ = write!(
            out,
            "- {} - {} ({units}, prereqs: {})",
            elective.course_code,
            elective.course_name,
            elective.prerequisites_label()
        );
        if !elective.description.is_empty() {
            let _ = write!(out, ": {}", elective.description);
        }
        out.push('\n');
    }
    out.truncate(out.trim_end().len());
    out
}
