//! Markup neutralisation for user-supplied text.
//!
//! Angle brackets are the only characters rewritten, so a sanitised string
//! contains no tag delimiters at all and sanitising it again is a no-op.

use serde_json::{Map, Value};

/// Escapes every `<` and `>` in `input`.
///
/// # Examples
///
/// ```
/// use trailhead_core::sanitize::sanitize_str;
///
/// assert_eq!(
///     sanitize_str("<script>alert(1)</script>"),
///     "&lt;script&gt;alert(1)&lt;/script&gt;"
/// );
/// assert_eq!(sanitize_str("Tom & Jerry's"), "Tom & Jerry's");
/// ```
pub fn sanitize_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns a copy of `value` with every string leaf sanitised.
///
/// Arrays keep their order and length, objects keep exactly their keys, and
/// numbers, booleans and nulls pass through unchanged.
pub fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_str(s)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(sanitize_map(map)),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

/// Sanitises every value of an attribute map; keys are kept verbatim.
pub fn sanitize_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), sanitize_value(value)))
        .collect()
}
