//! Prompt command handler

use super::fail;
use elective_advisor::catalog::load_electives;
use elective_advisor::config::Config;
use elective_advisor::prompt::{build_prompt, PromptRequest, RECOMMENDATION_SYSTEM};
use elective_advisor::verbose;
use std::path::Path;

/// Print the recommendation prompt for a job, degree and elective list.
pub fn run(job: &str, degree: &str, electives: &Path, count: Option<usize>, config: &Config) {
    let electives = match load_electives(electives) {
        Ok(electives) => electives,
        Err(e) => fail("Cannot build prompt", &format!("✗ {e}")),
    };

    verbose!("System: {RECOMMENDATION_SYSTEM}\n");
    println!(
        "{}",
        build_prompt(&PromptRequest {
            job_name: job,
            degree_name: degree,
            electives: &electives,
            count: count.unwrap_or_else(|| config.advisor.recommendation_count()),
        })
    );
}
