//! crates/study_coach_core/src/extract.rs
//!
//! Recovers the JSON payload a model buried in prose or markdown fencing.
//!
//! This is a best-effort boundary repair, not a grammar: it assumes one
//! top-level JSON object somewhere in the text. Truncated or internally
//! malformed JSON is not repaired beyond trimming the boundaries.

use serde_json::Value;

use crate::error::GenerationError;

/// Isolates and parses the JSON object embedded in `raw`.
///
/// Steps, in order: strip code-fence markers, trim whitespace, discard
/// everything before the first `{` and after the last `}`, then parse the
/// remaining substring.
pub fn extract_json(raw: &str) -> Result<Value, GenerationError> {
    let unfenced = raw.replace("```json", "").replace("```", "");
    let trimmed = unfenced.trim();

    let start = trimmed
        .find('{')
        .ok_or_else(|| GenerationError::Parse("no JSON object found in response".to_string()))?;
    let end = trimmed
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or_else(|| GenerationError::Parse("no JSON object found in response".to_string()))?;

    serde_json::from_str(&trimmed[start..=end])
        .map_err(|err| GenerationError::Parse(format!("malformed JSON after trimming: {err}")))
}
