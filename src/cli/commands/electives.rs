//! Electives command handler

use super::fail;
use elective_advisor::catalog::load_electives;
use elective_advisor::info;
use std::path::Path;

/// Print the parsed catalog as pretty JSON.
pub fn run(input: &Path) {
    if let Err(err) = print_electives(input) {
        fail(&format!("Cannot list electives in {}", input.display()), &err);
    }
}

fn print_electives(input: &Path) -> Result<(), String> {
    let electives = load_electives(input).map_err(|e| format!("✗ {e}"))?;
    info!("Loaded {} electives from {}", electives.len(), input.display());
    let json = serde_json::to_string_pretty(&electives)
        .map_err(|e| format!("✗ Failed to serialize electives: {e}"))?;
    println!("{json}");
    Ok(())
}
