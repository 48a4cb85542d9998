//! Integration tests for the advisor, catalog and validation layers

use elective_advisor::advisor::{
    decode_response, select_source, Advisor, AdvisorError, CannedResponseSource,
    RecommendationRequest, RecommendationSource,
};
use elective_advisor::models::Rating;
use elective_advisor::catalog::{find_elective, load_electives};
use elective_advisor::config::AdvisorConfig;
use elective_advisor::report::{reporter_for, ReportContext, ReportFormat};
use elective_advisor::validation::{
    missing_numbers, unknown_courses, validate_required, DEFAULT_REQUIRED_FIELDS,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RESPONSE: &str = include_str!("../fixtures/web_developer_response.txt");

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn request(electives_csv: Option<&Path>) -> RecommendationRequest {
    let request = RecommendationRequest {
        job_id: 42,
        job_name: "Web Developer".to_string(),
        degree_name: "Bachelor of Computer Science".to_string(),
        electives: Vec::new(),
        count: 3,
    };
    match electives_csv {
        Some(path) => request.with_catalog(path).expect("fixture catalog loads"),
        None => request,
    }
}

#[test]
fn discover_prefers_configured_path() {
    let dir = TempDir::new().unwrap();
    let configured = dir.path().join("custom.txt");
    fs::write(&configured, RESPONSE).unwrap();
    fs::write(dir.path().join("recommendations.txt"), "ignored").unwrap();

    let source =
        CannedResponseSource::discover(Some(&configured), &[dir.path().to_path_buf()]).unwrap();
    assert_eq!(source.path(), configured.as_path());
}

#[test]
fn discover_searches_directories_in_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("recommendations.txt"), RESPONSE).unwrap();
    fs::write(first.path().join("courses.json"), "[]").unwrap();

    let dirs = [first.path().to_path_buf(), second.path().to_path_buf()];
    let source = CannedResponseSource::discover(None, &dirs).unwrap();
    assert_eq!(source.path(), first.path().join("courses.json").as_path());
}

#[test]
fn discover_skips_missing_configured_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("recommendations.txt"), RESPONSE).unwrap();

    let missing = dir.path().join("nope.txt");
    let source =
        CannedResponseSource::discover(Some(&missing), &[dir.path().to_path_buf()]).unwrap();
    assert!(source.path().ends_with("recommendations.txt"));
}

#[test]
fn discover_lists_candidates_when_nothing_exists() {
    let dir = TempDir::new().unwrap();
    let err = CannedResponseSource::discover(None, &[dir.path().to_path_buf()]).unwrap_err();

    match &err {
        AdvisorError::ResponseNotFound { candidates } => {
            assert_eq!(candidates.len(), 2);
            assert!(candidates[0].ends_with("recommendations.txt"));
            assert!(candidates[1].ends_with("courses.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("courses.json"));
}

#[test]
fn select_source_uses_configured_response_file() {
    let config = AdvisorConfig {
        response_file: fixture("web_developer_response.txt")
            .to_string_lossy()
            .to_string(),
        ..AdvisorConfig::default()
    };
    let source = select_source(&config, &[]).unwrap();
    assert_eq!(source.name(), "canned");
    assert!(source.path().ends_with("web_developer_response.txt"));
}

#[test]
fn canned_source_read_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let source = CannedResponseSource::new(dir.path().join("gone.txt"));
    let err = source.generate(&request(None)).unwrap_err();
    assert!(matches!(err, AdvisorError::Read { .. }));
}

#[test]
fn recommend_from_canned_text_response() {
    let advisor = Advisor::new(CannedResponseSource::new(fixture(
        "web_developer_response.txt",
    )));
    let req = request(Some(&fixture("electives.csv")));

    let records = advisor.recommend(&req).unwrap();

    assert_eq!(records.len(), 3);
    assert!(missing_numbers(&records, 1..=3).is_empty());
    assert!(validate_required(&records, &DEFAULT_REQUIRED_FIELDS).is_empty());
    assert!(unknown_courses(&records, &req.electives).is_empty());
}

#[test]
fn recommend_from_canned_json_response() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.json");
    fs::write(
        &path,
        r#"[
            {"Number": 1, "Course Code": "CPSC 483", "Course Name": "Introduction to Machine Learning", "Rating": 90},
            {"Number": 3, "Course Code": "CPSC 999", "Rating": "N/A"}
        ]"#,
    )
    .unwrap();

    let req = request(Some(&fixture("electives.csv")));
    let records = Advisor::new(CannedResponseSource::new(&path))
        .recommend(&req)
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(missing_numbers(&records, 1..=3), vec![2]);
    let issues = validate_required(&records, &DEFAULT_REQUIRED_FIELDS);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].number, Some(3));
    assert_eq!(issues[0].missing, vec!["Course Name"]);
    assert_eq!(unknown_courses(&records, &req.electives), vec!["CPSC 999"]);
}

#[test]
fn json_response_in_elective_row_shape_decodes() {
    let records = decode_response(
        r#"[{"Course Code": "CPSC 449", "Course Name": "Web Back-End Engineering",
             "Units": 3, "Prereq1": "CPSC 332", "Prereq2": null,
             "Description": "Server-side web development."}]"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.course_code.as_deref(), Some("CPSC 449"));
    assert_eq!(r.field("Units").as_deref(), Some("3"));
    assert_eq!(r.field("Prereq1").as_deref(), Some("CPSC 332"));
    assert!(!r.has_field("Prereq2"));
    assert!(validate_required(&records, &DEFAULT_REQUIRED_FIELDS).is_empty());
}

#[test]
fn json_and_text_ratings_agree() {
    let from_json = decode_response(r#"[{"Number": 1, "Rating": "95"}]"#).unwrap();
    let from_text = decode_response("**Number:** 1\n**Rating:** 95").unwrap();

    assert_eq!(from_json[0].rating, Some(Rating::Score(95)));
    assert_eq!(from_json, from_text);
}

#[test]
fn malformed_json_response_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courses.json");
    fs::write(&path, "[{\"Number\": \"one\"}]").unwrap();

    let err = Advisor::new(CannedResponseSource::new(&path))
        .recommend(&request(None))
        .unwrap_err();
    assert!(matches!(err, AdvisorError::Json(_)));
}

#[test]
fn live_backend_is_rejected() {
    let config = AdvisorConfig {
        ai_enabled: true,
        ..AdvisorConfig::default()
    };
    let err = select_source(&config, &[fixture("")]).unwrap_err();
    assert!(matches!(err, AdvisorError::LiveBackendUnavailable));
}

#[test]
fn catalog_fixture_loads_with_optional_units() {
    let electives = load_electives(fixture("electives.csv")).unwrap();

    assert_eq!(electives.len(), 5);
    let security = find_elective(&electives, "cpsc 455").unwrap();
    assert_eq!(security.prerequisites, vec!["CPSC 253", "CPSC 351"]);
    assert!(security.description.contains("secure coding"));
    let study = find_elective(&electives, "CPSC 499").unwrap();
    assert_eq!(study.units, None);
    assert_eq!(study.prerequisites_label(), "None");
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_electives(dir.path().join("missing.csv")).unwrap_err();
    assert!(err.to_string().contains("missing.csv"));

    let err = request(None)
        .with_catalog(&dir.path().join("missing.csv"))
        .unwrap_err();
    assert!(matches!(err, AdvisorError::Catalog(_)));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn reports_render_for_every_format() {
    let records = Advisor::new(CannedResponseSource::new(fixture(
        "web_developer_response.txt",
    )))
    .recommend(&request(None))
    .unwrap();
    let ctx = ReportContext::new("Web Developer", "BS Computer Science", &records);
    let dir = TempDir::new().unwrap();

    for format in [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Json] {
        let path = dir.path().join(format!("report.{}", format.extension()));
        reporter_for(format).generate(&ctx, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("CPSC 449"), "{format} report lacks a course");
    }
}
