//! Structured-payload extraction from model output
//!
//! Model responses arrive as free text that usually, but not always, wraps
//! the requested JSON in markdown code fences or surrounding prose. This is
//! the single parsing contract shared by every oracle consumer.

use leadflow_core::{LeadflowError, LeadflowResult};

/// Extract a JSON payload from a string that might contain markdown code
/// blocks or prose around the payload
///
/// Handles both top-level objects and top-level arrays.
pub fn extract_json(content: &str) -> LeadflowResult<String> {
    // Try to find JSON in code blocks first
    if let Some(start) = content.find("```json") {
        let start = start + 7;
        if let Some(end) = content[start..].find("```") {
            return Ok(content[start..start + end].trim().to_string());
        }
    }

    // Fall back to the outermost object or array in the raw text
    let object = delimited_span(content, '{', '}');
    let array = delimited_span(content, '[', ']');

    let span = match (object, array) {
        (Some(o), Some(a)) => Some(if o.0 < a.0 { o } else { a }),
        (o, a) => o.or(a),
    };

    if let Some((start, end)) = span {
        return Ok(content[start..=end].to_string());
    }

    Err(LeadflowError::parse("No JSON payload found in response"))
}

fn delimited_span(content: &str, open: char, close: char) -> Option<(usize, usize)> {
    let start = content.find(open)?;
    let end = content.rfind(close)?;
    (end > start).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fenced_object() {
        let content = "Here you go:\n```json\n{\"a\": 1}\n```\nAnything else?";
        assert_eq!(extract_json(content).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn extracts_fenced_array() {
        let content = "```json\n[\"one\", \"two\", \"three\"]\n```";
        assert_eq!(extract_json(content).unwrap(), "[\"one\", \"two\", \"three\"]");
    }

    #[test]
    fn extracts_bare_array_from_prose() {
        let content = "Sure! [\"one\", \"two\"] -- hope that helps.";
        assert_eq!(extract_json(content).unwrap(), "[\"one\", \"two\"]");
    }

    #[test]
    fn extracts_bare_object_from_prose() {
        let content = "The result is {\"lead_id\": 7} as requested.";
        assert_eq!(extract_json(content).unwrap(), "{\"lead_id\": 7}");
    }

    #[test]
    fn prefers_outermost_delimiter() {
        let content = "[{\"a\": 1}, {\"b\": 2}]";
        assert_eq!(extract_json(content).unwrap(), content);
    }

    #[test]
    fn errors_when_no_payload_present() {
        let err = extract_json("I cannot help with that.").unwrap_err();
        assert!(matches!(err, LeadflowError::Parse(_)));
    }
}
