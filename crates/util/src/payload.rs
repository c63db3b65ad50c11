//! Response payload normalization.
//!
//! The content API is not consistent about list responses: some endpoints
//! return a bare JSON array, others wrap it as `{ "data": [...] }`.

use serde_json::Value;
use tracing::debug;

/// Wrapper key that may hold the list in an object-shaped response.
const LIST_WRAPPER_KEY: &str = "data";

/// Extract list items from a response payload.
///
/// Extraction order:
/// 1. Use a top-level array directly.
/// 2. Use the array stored under `data` in an object payload.
/// 3. Anything else yields an empty list.
pub fn extract_list_items(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(LIST_WRAPPER_KEY) {
            Some(Value::Array(items)) => items,
            _ => {
                debug!("object payload has no `{LIST_WRAPPER_KEY}` array; treating as empty");
                Vec::new()
            }
        },
        other => {
            debug!(kind = value_kind(&other), "unexpected payload shape; treating as empty");
            Vec::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_used_directly() {
        let items = extract_list_items(json!([{ "a": 1 }, { "a": 2 }]));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn data_wrapper_is_unwrapped() {
        let items = extract_list_items(json!({ "success": true, "data": [{ "a": 1 }] }));
        assert_eq!(items, vec![json!({ "a": 1 })]);
    }

    #[test]
    fn other_shapes_yield_empty_list() {
        assert!(extract_list_items(json!({ "data": "nope" })).is_empty());
        assert!(extract_list_items(json!({ "items": [1, 2] })).is_empty());
        assert!(extract_list_items(json!("text")).is_empty());
        assert!(extract_list_items(Value::Null).is_empty());
    }
}
