//! JSON report generator
//!
//! Emits the bare record list using the template's field names, so the output
//! can be fed back to the advisor as a canned response.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut json = serde_json::to_string_pretty(ctx.records)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisor::decode_response;
    use crate::core::parser::parse_recommendations;

    #[test]
    fn test_json_output_decodes_back_to_same_records() {
        let records = parse_recommendations(
            "**Number:** 1\n**Course Code:** CPSC 483\n**Rating:** N/A\n**Track:** AI",
        )
        .unwrap();
        let ctx = ReportContext::new("Data Scientist", "BS CS", &records);

        let json = JsonReporter::new().render(&ctx).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert_eq!(decode_response(&json).unwrap(), records);
    }
}
