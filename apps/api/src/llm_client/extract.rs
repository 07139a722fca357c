//! Recovers a JSON object from free-form model output.
//!
//! Models asked for JSON still wrap it in prose or markdown fences. Extraction
//! tries the interior of the first fenced block, then falls back to the span
//! from the first `{` to the last `}` of the whole text.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model output")]
    NoJson,

    #[error("model output is not valid JSON: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("model output has unexpected shape: {0}")]
    Shape(String),
}

/// The JSON kind a required top-level key must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Object,
    Array,
    String,
}

impl JsonKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            JsonKind::Object => value.is_object(),
            JsonKind::Array => value.is_array(),
            JsonKind::String => value.is_string(),
        }
    }
}

/// Extracts and parses the JSON object embedded in `text`.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    if let Some(inner) = fenced_block(text) {
        if let Ok(value) = serde_json::from_str(inner) {
            return Ok(value);
        }
    }

    let candidate = brace_span(text).ok_or(ExtractError::NoJson)?;
    Ok(serde_json::from_str(candidate)?)
}

/// Checks that `value` is an object holding every required key with the expected kind.
pub fn check_shape(value: &Value, required: &[(&str, JsonKind)]) -> Result<(), ExtractError> {
    let object = value
        .as_object()
        .ok_or_else(|| ExtractError::Shape("top-level value is not an object".to_string()))?;

    for (key, kind) in required {
        match object.get(*key) {
            Some(v) if kind.matches(v) => {}
            Some(_) => {
                return Err(ExtractError::Shape(format!("`{key}` is not {kind:?}")));
            }
            None => return Err(ExtractError::Shape(format!("missing `{key}`"))),
        }
    }
    Ok(())
}

/// Interior of the first ``` fenced block, without its optional language tag.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")? + 3;
    let rest = &text[start..];

    // A tag is a bare word on the opening line, e.g. ```json
    let body = match rest.find('\n') {
        Some(nl) if rest[..nl].trim().chars().all(|c| c.is_ascii_alphanumeric()) => &rest[nl + 1..],
        _ => rest,
    };

    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// Greedy span from the first `{` through the last `}`.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fenced_json_block_with_prose() {
        let text = "Here is the result:\n```json\n{\"a\":1}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_fenced_block_without_tag() {
        let text = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({"key": "value"}));
    }

    #[test]
    fn test_fenced_block_on_single_line() {
        let text = "```{\"key\": [1, 2]}```";
        assert_eq!(extract_json(text).unwrap(), json!({"key": [1, 2]}));
    }

    #[test]
    fn test_greedy_braces_keep_outermost_object() {
        let text = "blah {\"a\":1,\"b\":{\"c\":2}} trailing";
        assert_eq!(extract_json(text).unwrap(), json!({"a": 1, "b": {"c": 2}}));
    }

    #[test]
    fn test_bare_json_object() {
        let text = "  {\"milestones\": []}  ";
        assert_eq!(extract_json(text).unwrap(), json!({"milestones": []}));
    }

    #[test]
    fn test_invalid_fence_falls_back_to_braces() {
        let text = "```json\nnot json at all\n```\nActual: {\"ok\": true}";
        assert_eq!(extract_json(text).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_braces() {
        let text = "```json\n{\"a\": 1}";
        assert_eq!(extract_json(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_no_braces_is_no_json() {
        let err = extract_json("I cannot help with that.").unwrap_err();
        assert!(matches!(err, ExtractError::NoJson));
    }

    #[test]
    fn test_closing_brace_before_opening_is_no_json() {
        let err = extract_json("} oops {").unwrap_err();
        assert!(matches!(err, ExtractError::NoJson));
    }

    #[test]
    fn test_malformed_object_is_invalid() {
        let err = extract_json("Result: {\"a\": 1,} done").unwrap_err();
        assert!(matches!(err, ExtractError::Invalid(_)));
    }

    #[test]
    fn test_two_objects_in_prose_are_invalid() {
        // Greedy matching spans both objects, which is not a single JSON value.
        let err = extract_json("first {\"a\":1} then {\"b\":2}").unwrap_err();
        assert!(matches!(err, ExtractError::Invalid(_)));
    }

    #[test]
    fn test_check_shape_accepts_matching_keys() {
        let value = json!({"milestones": [], "summary": "x"});
        let required = [("milestones", JsonKind::Array), ("summary", JsonKind::String)];
        assert!(check_shape(&value, &required).is_ok());
    }

    #[test]
    fn test_check_shape_rejects_missing_key() {
        let err = check_shape(&json!({}), &[("milestones", JsonKind::Array)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "model output has unexpected shape: missing `milestones`"
        );
    }

    #[test]
    fn test_check_shape_rejects_wrong_kind() {
        let value = json!({"milestones": "six of them"});
        let err = check_shape(&value, &[("milestones", JsonKind::Array)]).unwrap_err();
        assert!(matches!(err, ExtractError::Shape(_)));
    }

    #[test]
    fn test_check_shape_rejects_non_object() {
        let err = check_shape(&json!([1, 2, 3]), &[]).unwrap_err();
        assert!(matches!(err, ExtractError::Shape(_)));
    }
}
