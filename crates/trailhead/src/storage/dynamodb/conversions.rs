//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between JSON items and DynamoDB
//! AttributeValue maps. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};
use trailhead_core::storage::{Item, RepositoryError};

/// A raw DynamoDB item.
pub type AttributeMap = HashMap<String, AttributeValue>;

// ============================================================================
// JSON -> DynamoDB
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(item_to_attributes(map)),
    }
}

/// Convert a JSON item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> AttributeMap {
    item.iter()
        .map(|(key, value)| (key.clone(), value_to_attribute(value)))
        .collect()
}

// ============================================================================
// DynamoDB -> JSON
// ============================================================================

/// Parse a DynamoDB number, keeping integers exact.
fn parse_number(raw: &str) -> Result<Number, RepositoryError> {
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Number::from(n));
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(Number::from(n));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {raw}")))
}

/// Convert a DynamoDB attribute to a JSON value.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => attributes_to_item(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

/// Convert a DynamoDB item to a JSON item.
pub fn attributes_to_item(attributes: &AttributeMap) -> Result<Item, RepositoryError> {
    attributes
        .iter()
        .map(|(key, attribute)| Ok((key.clone(), attribute_to_value(attribute)?)))
        .collect::<Result<Map<String, Value>, RepositoryError>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_campsite() -> Item {
        json!({
            "pk": "PARK#acad",
            "sk": "CAMPSITE#c6f0e6a3-56b6-4bb2-a3a4-6a0d3d3f9c55",
            "name": "Blackwoods",
            "description": "",
            "latitude": "44.31",
            "entity": "campsite",
            "images": [{"title": "Loop A", "crops": [{"aspectRatio": 1.5}]}],
            "campsites": {"totalSites": "281"},
            "open": true,
            "closedReason": null
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_item_round_trip() {
        let item = sample_campsite();

        let attributes = item_to_attributes(&item);
        let back = attributes_to_item(&attributes).unwrap();

        assert_eq!(back, item);
    }

    #[test]
    fn test_item_has_string_keys() {
        let attributes = item_to_attributes(&sample_campsite());

        assert_eq!(
            attributes.get("pk"),
            Some(&AttributeValue::S("PARK#acad".to_string()))
        );
        assert_eq!(
            attributes.get("description"),
            Some(&AttributeValue::S(String::new()))
        );
    }

    #[test]
    fn test_numbers_stored_as_n() {
        assert_eq!(
            value_to_attribute(&json!(-68.247)),
            AttributeValue::N("-68.247".to_string())
        );
        assert_eq!(
            attribute_to_value(&AttributeValue::N("42".to_string())).unwrap(),
            json!(42)
        );
        assert_eq!(
            attribute_to_value(&AttributeValue::N("44.409".to_string())).unwrap(),
            json!(44.409)
        );
    }

    #[test]
    fn test_invalid_number_is_invalid_data() {
        let result = attribute_to_value(&AttributeValue::N("north".to_string()));

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_string_set_becomes_array() {
        let set = AttributeValue::Ss(vec!["hiking".to_string(), "birding".to_string()]);
        let value = attribute_to_value(&set).unwrap();

        assert_eq!(value, json!(["hiking", "birding"]));
    }
}
