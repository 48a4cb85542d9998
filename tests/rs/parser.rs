//! Integration tests for the recommendation parser

use elective_advisor::models::{CourseRecommendation, Rating};
use elective_advisor::parser::{
    filter_relevant_lines, parse_records, parse_recommendations, ParseError, RecordBuilder,
};

fn parse_lines(lines: &[&str]) -> Vec<CourseRecommendation> {
    parse_records(lines).expect("lines should parse")
}

#[test]
fn single_well_formed_record_round_trips_every_field() {
    let text = "\
**Number:** 1
**Course Code:** CPSC 483
**Course Name:** Introduction to Machine Learning
**Rating:** 100
**Explanation:** Machine Learning is a cornerstone of AI development.
**Prerequisites:** CPSC 335, MATH 338
";
    let records = parse_records(filter_relevant_lines(text)).unwrap();

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.number, Some(1));
    assert_eq!(r.course_code.as_deref(), Some("CPSC 483"));
    assert_eq!(r.course_name.as_deref(), Some("Introduction to Machine Learning"));
    assert_eq!(r.rating, Some(Rating::Score(100)));
    assert_eq!(
        r.explanation.as_deref(),
        Some("Machine Learning is a cornerstone of AI development.")
    );
    assert_eq!(r.prerequisites.as_deref(), Some("CPSC 335, MATH 338"));
    assert!(r.extra.is_empty());
}

#[test]
fn explanation_fragments_join_with_single_spaces() {
    let records = parse_lines(&[
        "**Number:** 1",
        "**Explanation:**   First part.  ",
        "  second part.",
        "third part.   ",
    ]);
    assert_eq!(
        records[0].explanation.as_deref(),
        Some("First part. second part. third part.")
    );
}

#[test]
fn two_courses_with_wrapped_explanations() {
    let records = parse_lines(&[
        "**Number:** 1",
        "**Course Code:** CPSC 483",
        "**Course Name:** Introduction to Machine Learning",
        "**Rating:** 100",
        "**Explanation:** Machine Learning is a cornerstone of AI development",
        "It covers supervised/unsupervised learning and real datasets.",
        "**Prerequisites:** CPSC 335, MATH 338",
        "**Number:** 2",
        "**Course Code:** CPSC 375",
        "**Course Name:** Introduction to Data Science and Big Data",
        "**Rating:** 95",
        "**Explanation:** Strong foundation in data pipelines and modeling.",
        "Includes IoT/time-series examples and big-data platforms.",
        "**Prerequisites:** CPSC 131, MATH 338",
    ]);

    assert_eq!(records.len(), 2);
    let (c1, c2) = (&records[0], &records[1]);
    assert_eq!(c1.number, Some(1));
    assert_eq!(c1.rating, Some(Rating::Score(100)));
    assert!(c1
        .explanation
        .as_deref()
        .unwrap()
        .contains("cornerstone of AI development It covers supervised/unsupervised"));
    assert_eq!(c1.prerequisites.as_deref(), Some("CPSC 335, MATH 338"));

    assert_eq!(c2.number, Some(2));
    assert_eq!(c2.course_code.as_deref(), Some("CPSC 375"));
    assert_eq!(c2.rating, Some(Rating::Score(95)));
    assert!(c2.explanation.as_deref().unwrap().ends_with("big-data platforms."));
    assert_eq!(c2.prerequisites.as_deref(), Some("CPSC 131, MATH 338"));
}

#[test]
fn number_boundary_does_not_leak_fields() {
    let records = parse_lines(&[
        "**Number:** 9",
        "**Course Code:** CPSC 474",
        "**Course Name:** Parallel and Distributed Computing",
        "**Explanation:** Focus on multi-core and GPU.",
        "**Prerequisites:** CPSC 351",
        "**Number:** 10",
        "**Course Code:** CPSC 479",
    ]);

    assert_eq!(
        records.iter().map(|r| r.number).collect::<Vec<_>>(),
        vec![Some(9), Some(10)]
    );
    let second = &records[1];
    assert_eq!(second.course_code.as_deref(), Some("CPSC 479"));
    assert!(second.course_name.is_none());
    assert!(second.explanation.is_none());
    assert!(second.prerequisites.is_none());
}

#[test]
fn last_record_is_flushed_at_end_of_input() {
    let records = parse_lines(&[
        "**Number:** 3",
        "**Course Code:** CPSC 455",
        "**Course Name:** Web Security",
        "**Explanation:** Covers XSS and CSRF in depth.",
        "Also covers SQLi and auth patterns.",
        "Hands-on security testing practice.",
    ]);

    assert_eq!(records.len(), 1);
    let explanation = records[0].explanation.as_deref().unwrap();
    assert!(explanation.starts_with("Covers XSS and CSRF in depth."));
    assert!(explanation.ends_with("security testing practice."));
}

#[test]
fn non_numeric_rating_is_kept_as_text() {
    let records = parse_recommendations("**Number:** 7\n**Rating:** N/A").unwrap();
    assert_eq!(records[0].rating, Some(Rating::Text("N/A".to_string())));
    assert_eq!(records[0].field("Rating").as_deref(), Some("N/A"));
}

#[test]
fn prerequisites_qualifier_is_stripped_only_when_present() {
    assert_eq!(
        filter_relevant_lines("**Prerequisites:** Need to take: CPSC 335, MATH 338"),
        vec!["**Prerequisites:** CPSC 335, MATH 338"]
    );
    assert_eq!(
        filter_relevant_lines("**Prerequisites:** CPSC 335, MATH 338"),
        vec!["**Prerequisites:** CPSC 335, MATH 338"]
    );

    let records =
        parse_recommendations("**Number:** 1\n**Prerequisites:** Requires: CPSC 131").unwrap();
    assert_eq!(records[0].prerequisites.as_deref(), Some("CPSC 131"));
}

#[test]
fn unknown_keys_pass_through_verbatim() {
    let records = parse_lines(&[
        "**Number:** 1",
        "**Course Code:** CPSC 431",
        "**Course Name:** Database and Applications",
        "**Rating:** 92",
        "**Instructor:** Dr. Smith",
        "**Explanation:** Real-world DB design and app dev.",
    ]);
    assert_eq!(records[0].field("Instructor").as_deref(), Some("Dr. Smith"));
    assert_eq!(
        records[0].extra.get("Instructor").map(String::as_str),
        Some("Dr. Smith")
    );
}

#[test]
fn key_order_within_a_record_does_not_matter() {
    let in_order = parse_lines(&[
        "**Number:** 7",
        "**Course Code:** CPSC 454",
        "**Course Name:** Cloud Computing and Security",
        "**Rating:** N/A",
        "**Explanation:** Discusses distributed systems and cloud risks.",
        "Touches virtualization and deployment models.",
        "**Prerequisites:** CPSC 351, CPSC 353",
    ]);
    let shuffled = parse_lines(&[
        "**Number:** 7",
        "**Rating:** N/A",
        "**Course Name:** Cloud Computing and Security",
        "**Course Code:** CPSC 454",
        "**Explanation:** Discusses distributed systems and cloud risks.",
        "Touches virtualization and deployment models.",
        "**Prerequisites:** CPSC 351, CPSC 353",
    ]);
    assert_eq!(in_order, shuffled);
}

#[test]
fn empty_input_yields_no_records() {
    assert!(filter_relevant_lines("").is_empty());
    assert!(parse_records(Vec::<String>::new()).unwrap().is_empty());
    assert!(parse_recommendations("No recommendations today.\n\n").unwrap().is_empty());
}

#[test]
fn continuation_after_other_fields_is_discarded() {
    let records = parse_lines(&[
        "**Number:** 1",
        "**Prerequisites:** CPSC 351",
        "or instructor consent",
        "**Course Code:** CPSC 474",
    ]);
    assert_eq!(records[0].prerequisites.as_deref(), Some("CPSC 351"));
    assert!(records[0].explanation.is_none());
}

#[test]
fn non_integer_number_is_an_error() {
    let err = parse_lines_err(&["**Number:** 1", "**Course Code:** CPSC 449", "**Number:** 2a"]);
    match err {
        ParseError::InvalidNumber { line, value, .. } => {
            assert_eq!(line, 3);
            assert_eq!(value, "2a");
        }
    }
}

fn parse_lines_err(lines: &[&str]) -> ParseError {
    parse_records(lines).expect_err("lines should not parse")
}

#[test]
fn builder_flushes_on_demand() {
    let mut builder = RecordBuilder::new();
    assert!(!builder.flush());

    builder.feed("**Number:** 4").unwrap();
    builder.feed("**Explanation:** Part one").unwrap();
    builder.feed("part two").unwrap();
    assert!(builder.has_pending());
    assert!(builder.flush());
    assert!(!builder.has_pending());
    assert_eq!(
        builder.records()[0].explanation.as_deref(),
        Some("Part one part two")
    );

    // Continuation lines after a flush have no explanation to join.
    builder.feed("stray line").unwrap();
    assert_eq!(builder.finish().len(), 1);
}

#[test]
fn full_response_fixture_parses() {
    let raw = include_str!("../fixtures/web_developer_response.txt");
    let records = parse_recommendations(raw).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].prerequisites.as_deref(), Some("CPSC 131"));
    assert_eq!(records[1].label(), "CPSC 449 - Web Back-End Engineering");
    assert_eq!(records[2].rating.as_ref().and_then(Rating::score), None);
    assert_eq!(records[2].field("Instructor").as_deref(), Some("Dr. Smith"));
}
