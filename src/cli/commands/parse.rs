//! Parse command handler
//!
//! Reads a recommendation response from a file or stdin and renders the
//! records it contains.

use super::{emit_report, fail, parse_format};
use elective_advisor::parser::parse_recommendations;
use elective_advisor::report::ReportContext;
use elective_advisor::validation::{missing_numbers, validate_required};
use elective_advisor::{info, verbose, warn};
use std::io;
use std::path::Path;

/// Options for the parse command
pub struct ParseOptions<'a> {
    /// Response file, or `-` for stdin
    pub input: &'a Path,
    /// Output format name
    pub format: &'a str,
    /// Output path; stdout when `None`
    pub output: Option<&'a Path>,
    /// Highest Number expected
    pub expect: Option<i64>,
    /// Fields every record must carry
    pub require: &'a [String],
}

/// Run the parse command.
pub fn run(opts: &ParseOptions) {
    if let Err(err) = parse_input(opts) {
        fail(&format!("Parse failed for {}", opts.input.display()), &err);
    }
}

fn read_input(input: &Path) -> Result<String, String> {
    if input.as_os_str() == "-" {
        io::read_to_string(io::stdin()).map_err(|e| format!("✗ Failed to read stdin: {e}"))
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| format!("✗ Failed to read {}: {e}", input.display()))
    }
}

fn parse_input(opts: &ParseOptions) -> Result<(), String> {
    let format = parse_format(opts.format)?;
    let raw = read_input(opts.input)?;

    let records = parse_recommendations(&raw)
        .map_err(|e| format!("✗ Failed to parse {}: {e}", opts.input.display()))?;
    info!("Parsed {} records from {}", records.len(), opts.input.display());
    for record in &records {
        verbose!("  {}", record.label());
    }

    if let Some(expected) = opts.expect {
        let missing = missing_numbers(&records, 1..=expected);
        if !missing.is_empty() {
            warn!("Missing recommendation numbers: {missing:?}");
        }
    }

    if !opts.require.is_empty() {
        let issues = validate_required(&records, opts.require);
        for issue in &issues {
            let number = issue
                .number
                .map_or_else(|| "?".to_string(), |n| n.to_string());
            eprintln!(
                "✗ Record #{} (Number {number}) is missing: {}",
                issue.index + 1,
                issue.missing.join(", ")
            );
        }
        if !issues.is_empty() {
            return Err(format!(
                "✗ {} of {} records are missing required fields",
                issues.len(),
                records.len()
            ));
        }
    }

    emit_report(format, &ReportContext::new("", "", &records), opts.output)
}
