//! Selects the template lines of a raw recommendation response

/// Emphasis marker that tags template field lines
pub const BOLD_MARKER: &str = "**";

/// Label of the prerequisites field, including its bold delimiters
const PREREQUISITES_LABEL: &str = "**Prerequisites:**";

/// Keep the lines of `raw_text` that contain the bold marker, trimmed and in order.
///
/// A `**Prerequisites:**` line that carries a qualifier before the real value
/// ("**Prerequisites:** Need to take: CPSC 335") is reduced to
/// "**Prerequisites:** CPSC 335". Every other kept line is returned as-is.
///
/// # Examples
/// ```
/// use elective_advisor::parser::filter_relevant_lines;
///
/// let lines = filter_relevant_lines("Here you go:\n**Number:** 1\n\n**Course Code:** CPSC 483\n");
/// assert_eq!(lines, vec!["**Number:** 1", "**Course Code:** CPSC 483"]);
/// ```
#[must_use]
pub fn filter_relevant_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .filter(|line| line.contains(BOLD_MARKER))
        .map(|line| strip_prerequisites_qualifier(line.trim()))
        .collect()
}

/// Drop everything between the prerequisites label and the first colon after it.
///
/// Only that first colon goes; later colons stay in the value. Lines without a
/// colon after the label come back unchanged.
fn strip_prerequisites_qualifier(line: &str) -> String {
    let Some(rest) = line.strip_prefix(PREREQUISITES_LABEL) else {
        return line.to_string();
    };
    rest.split_once(':').map_or_else(
        || line.to_string(),
        |(_, value)| {
            format!("{PREREQUISITES_LABEL} {}", value.trim_start())
                .trim_end()
                .to_string()
        },
    )
}
