//! Integration smoke tests for `elective_advisor`

use elective_advisor::models::Rating;
use elective_advisor::prompt::{build_prompt, PromptRequest};
use elective_advisor::{get_version, parser, report};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn prompt_template_parses_back_into_one_record() {
    let prompt = build_prompt(&PromptRequest {
        job_name: "Web Developer",
        degree_name: "BS Computer Science",
        electives: &[],
        count: 1,
    });
    let records = parser::parse_recommendations(&prompt).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].number, Some(1));
    // Placeholders are not numeric ratings.
    assert!(records[0].rating.as_ref().and_then(Rating::score).is_none());
    assert!(records[0].prerequisites.is_some());
}

#[test]
fn parse_then_render_markdown() {
    let records =
        parser::parse_recommendations("**Number:** 1\n**Course Code:** CPSC 349\n**Rating:** 98")
            .unwrap();
    let ctx = report::ReportContext::new("Web Developer", "", &records);
    let md = report::reporter_for(report::ReportFormat::Markdown)
        .render(&ctx)
        .unwrap();
    assert!(md.contains("## 1. CPSC 349"));
    assert!(md.contains("**Degree:** Unspecified"));
}
