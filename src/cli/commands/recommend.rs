//! Recommend command handler
//!
//! Builds a request for a job and degree, asks the configured source for
//! recommendations, checks them, and writes a report.

use super::{emit_report, fail, parse_format};
use elective_advisor::advisor::{default_search_dirs, select_source, Advisor, RecommendationRequest};
use elective_advisor::config::Config;
use elective_advisor::models::CourseRecommendation;
use elective_advisor::report::{ReportContext, ReportFormat};
use elective_advisor::validation::{
    missing_numbers, unknown_courses, validate_required, DEFAULT_REQUIRED_FIELDS,
};
use elective_advisor::{debug, verbose, warn};
use std::path::{Path, PathBuf};

/// Options for the recommend command
pub struct RecommendOptions<'a> {
    /// Target job title
    pub job: &'a str,
    /// Degree or program name
    pub degree: &'a str,
    /// Job identifier
    pub job_id: i64,
    /// Electives CSV
    pub electives: Option<&'a Path>,
    /// Output format name
    pub format: &'a str,
    /// Output path; defaults under `reports_dir`
    pub output: Option<&'a Path>,
}

/// Run the recommend command.
pub fn run(opts: &RecommendOptions, config: &Config) {
    if let Err(err) = recommend(opts, config) {
        fail(&format!("Recommendation failed for '{}'", opts.job), &err);
    }
}

fn recommend(opts: &RecommendOptions, config: &Config) -> Result<(), String> {
    let format = parse_format(opts.format)?;

    let mut request = RecommendationRequest {
        job_id: opts.job_id,
        job_name: opts.job.to_string(),
        degree_name: opts.degree.to_string(),
        electives: Vec::new(),
        count: config.advisor.recommendation_count(),
    };
    if let Some(path) = opts.electives {
        request = request.with_catalog(path).map_err(|e| format!("✗ {e}"))?;
    }
    debug!("Prompt:\n{}", request.prompt());

    let source = select_source(&config.advisor, &default_search_dirs()).map_err(|e| format!("✗ {e}"))?;
    let records = Advisor::new(source)
        .recommend(&request)
        .map_err(|e| format!("✗ {e}"))?;

    check_records(&records, &request);

    let output_path = resolve_output(opts, format, config)?;
    let ctx = ReportContext::new(&request.job_name, &request.degree_name, &records);
    emit_report(format, &ctx, Some(&output_path))?;

    print_summary(&records);
    Ok(())
}

/// Warn about gaps without failing the command
fn check_records(records: &[CourseRecommendation], request: &RecommendationRequest) {
    let expected = i64::try_from(request.count).unwrap_or(i64::MAX);
    let missing = missing_numbers(records, 1..=expected);
    if !missing.is_empty() {
        warn!("Missing recommendation numbers: {missing:?}");
    }

    for issue in validate_required(records, &DEFAULT_REQUIRED_FIELDS) {
        warn!(
            "Recommendation #{} is missing: {}",
            issue.index + 1,
            issue.missing.join(", ")
        );
    }

    if !request.electives.is_empty() {
        for code in unknown_courses(records, &request.electives) {
            warn!("Recommended course {code} is not in the elective list");
        }
    }
}

fn resolve_output(
    opts: &RecommendOptions,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = opts.output {
        return Ok(output.to_path_buf());
    }
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!(
        "{}_recommendations.{}",
        file_stem_for(opts.job),
        format.extension()
    )))
}

/// Lowercase alphanumeric file stem for a job title
fn file_stem_for(job: &str) -> String {
    let stem: String = job
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "job".to_string()
    } else {
        stem.to_string()
    }
}

fn print_summary(records: &[CourseRecommendation]) {
    println!("\n=== Recommendations ===");
    for record in records {
        let number = record
            .number
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let rating = record
            .rating
            .as_ref()
            .map_or_else(String::new, |r| format!(" ({r})"));
        println!("{number:>3}. {}{rating}", record.label());
        if let Some(explanation) = record.explanation.as_deref() {
            verbose!("     {explanation}");
        }
    }
}
