//! Tolerant response-body handling.
//!
//! The backend does not guarantee a stable envelope: some endpoints return
//! a bare array, some wrap it in `data`, some nest it under an arbitrary
//! key, and error bodies are sometimes plain text. These helpers implement
//! the wrapper's normalization contract: parse what parses, never fail on
//! a malformed body.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parses a response body read as text.
///
/// Valid JSON is returned as parsed; anything else becomes a
/// [`Value::String`] carrying the raw text. An empty body is an empty
/// object, so field probes on it simply find nothing.
#[must_use]
pub fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Pulls the backend's error message out of a parsed body.
///
/// Checks the `message` field first, then `error`. Returns `None` when the
/// body carries neither, letting the caller fall back to a status line.
#[must_use]
pub fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .map(str::to_string)
}

/// Extracts the collection a list endpoint responded with.
///
/// Accepts a top-level array, a `data` array, or the first array-valued
/// property of the response object. Everything else yields an empty list.
#[must_use]
pub fn extract_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if matches!(map.get("data"), Some(Value::Array(_))) {
                if let Some(Value::Array(items)) = map.remove("data") {
                    return items;
                }
            }
            map.into_iter()
                .find_map(|(_, value)| match value {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Extracts the scalar a statistics endpoint responded with.
///
/// Accepts a bare number, a numeric string, or either of those under a
/// `data` field. Anything else counts as zero.
#[must_use]
pub fn extract_number(body: &Value) -> f64 {
    match body {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        Value::Object(map) => map.get("data").map(extract_number).unwrap_or_default(),
        _ => 0.0,
    }
}

/// Typed variant of [`extract_list`].
///
/// Elements that do not deserialize into `T` are dropped rather than
/// failing the whole list; a single malformed record must not blank out a
/// management page.
#[must_use]
pub fn extract_items<T: DeserializeOwned>(body: Value) -> Vec<T> {
    extract_list(body)
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that valid JSON parses and malformed bodies fall back to text
    #[test]
    fn test_parse_body_fallback() {
        assert_eq!(parse_body(r#"{"ok":true}"#), json!({"ok": true}));
        assert_eq!(parse_body("token-string"), json!("token-string"));
        assert_eq!(parse_body("<html>502</html>"), json!("<html>502</html>"));
        assert_eq!(parse_body(""), json!({}));
    }

    /// Tests message precedence: `message`, then `error`, then nothing
    #[test]
    fn test_error_message_precedence() {
        assert_eq!(
            error_message(&json!({"message": "bad", "error": "worse"})),
            Some("bad".to_string())
        );
        assert_eq!(
            error_message(&json!({"error": "worse"})),
            Some("worse".to_string())
        );
        assert_eq!(error_message(&json!({"detail": "ignored"})), None);
        assert_eq!(error_message(&json!("plain text body")), None);
    }

    /// Tests collection extraction across the known envelope shapes
    #[test]
    fn test_extract_list_shapes() {
        assert_eq!(extract_list(json!([1, 2])), vec![json!(1), json!(2)]);
        assert_eq!(extract_list(json!({"data": [1]})), vec![json!(1)]);
        assert_eq!(
            extract_list(json!({"count": 1, "transactions": [1]})),
            vec![json!(1)]
        );
        assert!(extract_list(json!({"count": 1})).is_empty());
        assert!(extract_list(json!("nope")).is_empty());
    }

    /// Tests scalar extraction across the statistics body shapes
    #[test]
    fn test_extract_number_shapes() {
        assert_eq!(extract_number(&json!(42)), 42.0);
        assert_eq!(extract_number(&json!(13.5)), 13.5);
        assert_eq!(extract_number(&json!("1200")), 1200.0);
        assert_eq!(extract_number(&json!({ "data": 7 })), 7.0);
        assert_eq!(extract_number(&json!({ "data": "7" })), 7.0);
        assert_eq!(extract_number(&json!({ "count": 7 })), 0.0);
        assert_eq!(extract_number(&json!(null)), 0.0);
        assert_eq!(extract_number(&json!("many")), 0.0);
    }

    /// Tests that malformed elements are dropped, not fatal
    #[test]
    fn test_extract_items_drops_malformed() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Row {
            id: i64,
        }

        let rows: Vec<Row> = extract_items(json!([{"id": 1}, {"id": "x"}, {"id": 2}]));
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }
}
