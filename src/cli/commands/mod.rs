//! CLI command handlers for `elective-advisor`.
//!
//! Each command is implemented in its own submodule. Handlers report failures
//! as `✗ ...` messages and exit non-zero.

pub mod config;
pub mod electives;
pub mod parse;
pub mod prompt;
pub mod recommend;

use elective_advisor::info;
use elective_advisor::report::{reporter_for, ReportContext, ReportFormat};
use std::path::Path;
use std::str::FromStr;

/// Parse a `--format` value
fn parse_format(format_str: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: json, markdown, or html"))
}

/// Render `ctx` to `output`, or to stdout when no output path is given
fn emit_report(format: ReportFormat, ctx: &ReportContext, output: Option<&Path>) -> Result<(), String> {
    let reporter = reporter_for(format);
    match output {
        Some(path) => {
            reporter
                .generate(ctx, path)
                .map_err(|e| format!("✗ Failed to write {format} report {}: {e}", path.display()))?;
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
        }
        None => {
            let rendered = reporter
                .render(ctx)
                .map_err(|e| format!("✗ Failed to render {format} report: {e}"))?;
            print!("{rendered}");
        }
    }
    Ok(())
}

/// Print a failure and exit non-zero
fn fail(context: &str, err: &str) -> ! {
    elective_advisor::error!("{context}: {err}");
    eprintln!("{err}");
    std::process::exit(1);
}
