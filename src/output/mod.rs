// Output formatting — terminal banners and JSON rendering.

pub mod terminal;

use anyhow::Result;

use crate::models::RiskAssessment;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, so emoji-heavy posts never panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Serialize an assessment as pretty JSON.
pub fn to_json(assessment: &RiskAssessment) -> Result<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}
