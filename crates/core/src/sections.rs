use regex::Regex;
use serde::Serialize;

/// Placeholder returned when a requested section label is absent.
pub const NOT_AVAILABLE: &str = "Not available.";

/// The section labels the review prompt instructs the model to emit,
/// in display order.
pub const REVIEW_LABELS: [&str; 4] = [
    "Corrected Code",
    "Suggestions",
    "Explanations",
    "Expected Output",
];

/// The four review sections, ready for tabbed or block display.
///
/// Fields hold the extracted text, or [`NOT_AVAILABLE`] when the model never
/// emitted the corresponding header. `corrected_code` additionally has
/// markdown code fences stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSections {
    pub corrected_code: String,
    pub suggestions: String,
    pub explanations: String,
    pub expected_output: String,
}

/// Extract the text following the first `**<label>:**` header.
///
/// Label matching is case-insensitive. Content runs up to (but not
/// including) the next `**` or the end of the text, trimmed of surrounding
/// whitespace. A label that never appears yields [`NOT_AVAILABLE`]; a header
/// with nothing before the next header yields the empty string, which is
/// deliberately NOT replaced by the sentinel.
pub fn extract_section(text: &str, label: &str) -> String {
    // The lazy capture terminated by `(?:\*\*|$)` stops at the first
    // following header, like a lookahead would.
    let pattern = format!(r"(?is)\*\*{}:\*\*(.*?)(?:\*\*|$)", regex::escape(label));
    let re = Regex::new(&pattern).expect("escaped label always forms a valid pattern");

    match re.captures(text) {
        Some(caps) => caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Extract every label in order, preserving the caller's ordering.
///
/// Pure function from (text, ordered label list) to an ordered label →
/// content mapping; labels missing from the text map to [`NOT_AVAILABLE`].
pub fn extract_sections(text: &str, labels: &[&str]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|label| (label.to_string(), extract_section(text, label)))
        .collect()
}

/// Remove markdown code fence markers (triple backtick, optional language
/// tag) from a section body. The fenced content itself is preserved.
pub fn strip_code_fences(text: &str) -> String {
    let re = Regex::new(r"```\w*").expect("static pattern");
    re.replace_all(text, "").to_string()
}

/// Split a full model response into the four review sections.
///
/// The Corrected Code section has its code fences stripped and is re-trimmed
/// so a fenced snippet extracts to the bare code.
pub fn extract_review_sections(text: &str) -> ReviewSections {
    let corrected = extract_section(text, "Corrected Code");

    ReviewSections {
        corrected_code: strip_code_fences(&corrected).trim().to_string(),
        suggestions: extract_section(text, "Suggestions"),
        explanations: extract_section(text, "Explanations"),
        expected_output: extract_section(text, "Expected Output"),
    }
}
