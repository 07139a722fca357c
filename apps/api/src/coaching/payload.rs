//! Request payload: an untyped JSON object of named fields.
//!
//! Endpoints never enforce required fields. A missing field only degrades the
//! prompt, it never aborts the request.

use serde_json::{Map, Value};

use crate::errors::AppError;

/// Rendered in place of any absent or null field.
pub const MISSING_FIELD_PLACEHOLDER: &str = "não informado";

#[derive(Debug, Clone, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Decodes a raw request body. Anything but a JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Ok(Payload(fields)),
            Ok(other) => Err(AppError::InvalidPayload(format!(
                "expected a JSON object, got {}",
                kind_name(&other)
            ))),
            Err(e) => Err(AppError::InvalidPayload(e.to_string())),
        }
    }

    /// Field value as prompt text.
    pub fn text(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => MISSING_FIELD_PLACEHOLDER.to_string(),
            Some(Value::String(s)) if s.trim().is_empty() => MISSING_FIELD_PLACEHOLDER.to_string(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Array(items)) if items.is_empty() => MISSING_FIELD_PLACEHOLDER.to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Some(other) => other.to_string(),
        }
    }

    /// Field value echoed back verbatim in a response envelope.
    pub fn raw(&self, field: &str) -> Value {
        self.0.get(field).cloned().unwrap_or(Value::Null)
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
