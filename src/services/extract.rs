//! Generic JSON extractors.

use serde_json::Value;

use crate::either::{Failure, Maybe, Success};

/// Look up `key` in a JSON object.
pub fn extract_json_key(data: &Value, key: &str) -> Maybe<Value> {
    match data.get(key) {
        Some(value) => Success(value.clone()),
        None => Failure(format!("Cannot find key '{key}' in data")),
    }
}

/// Look up `key` and require its value to be an array.
pub fn extract_json_array(data: &Value, key: &str) -> Maybe<Vec<Value>> {
    extract_json_key(data, key).chain(|value| match value {
        Value::Array(items) => Success(items),
        other => Failure(format!(
            "Key '{key}' is not a list (got {})",
            json_type_name(&other)
        )),
    })
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
