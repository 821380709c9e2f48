//! Turning raw model text into JSON.

use serde_json::Value;

/// Result of decoding model output.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedOutput {
    /// The text (after fence stripping) is valid JSON.
    Parsed(Value),
    /// The text is not JSON; `raw` is the untouched model answer.
    Unparsed { reason: String, raw: String },
}

impl DecodedOutput {
    pub fn is_parsed(&self) -> bool {
        matches!(self, DecodedOutput::Parsed(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            DecodedOutput::Parsed(value) => Some(value),
            DecodedOutput::Unparsed { .. } => None,
        }
    }
}

/// Removes Markdown code fences the model wraps JSON in.
///
/// Every "```json" marker and then every remaining "```" marker is removed,
/// each together with one newline directly after it; the result is trimmed.
pub fn strip_code_fences(raw: &str) -> String {
    let without_json_fences = remove_marker(raw, "```json");
    remove_marker(&without_json_fences, "```").trim().to_string()
}

fn remove_marker(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(marker) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + marker.len()..];
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    out.push_str(rest);
    out
}

/// Strips fences and parses the remainder as JSON.
pub fn decode_model_output(raw: &str) -> DecodedOutput {
    match serde_json::from_str(&strip_code_fences(raw)) {
        Ok(value) => DecodedOutput::Parsed(value),
        Err(e) => DecodedOutput::Unparsed {
            reason: e.to_string(),
            raw: raw.to_string(),
        },
    }
}
