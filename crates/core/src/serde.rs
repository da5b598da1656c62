//! Serde helper functions for request deserialization.
//!
//! Clients send coordinates either as JSON numbers or as strings holding a
//! number, and query-string values may carry stray whitespace. These helpers
//! normalise both before the typed request records see them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a number or numeric string into an `f64`.
pub fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(s.trim().parse::<f64>().map_err(serde::de::Error::custom)?),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a number, found {other}"
            )))
        }
    };

    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| serde::de::Error::custom("number out of range"))
}

/// Deserialize a string, or a number rendered as its decimal text.
///
/// Absent and null values become the empty string.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(match n.as_f64() {
            // f64 Display drops the trailing ".0" that serde_json prints.
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        }),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// Deserialize a string with surrounding whitespace removed.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}
