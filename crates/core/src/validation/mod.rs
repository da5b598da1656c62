mod error;
mod formats;
mod schema;
mod schemas;

use serde_json::{Map, Value};

pub use error::ValidationError;
pub use formats::{
    is_email, is_numeric, is_phone_number, is_uri, is_uuid_v4, is_valid_park_code,
    NUMERIC_PATTERN, PARK_CODE_PATTERN, PHONE_PATTERN,
};
pub use schema::{Field, ObjectSchema, Presence, Rule, StringFormat};
pub use schemas::{
    add_favorite_schema, article_schema, campsite_query_schema, campsite_schema,
    favorites_query_schema, park_schema, remove_favorite_schema,
};

fn invalid_json() -> ValidationError {
    ValidationError::new("\"value\" must be valid JSON").in_body()
}

/// Decodes raw request bytes as text; bytes that are not UTF-8 cannot be JSON.
pub fn body_text(bytes: &[u8]) -> Result<&str, ValidationError> {
    std::str::from_utf8(bytes).map_err(|_| invalid_json())
}

/// Parses a raw request body.
///
/// An absent or blank body is treated as an empty object.
pub fn parse_body(body: Option<&str>) -> Result<Value, ValidationError> {
    match body.map(str::trim) {
        None | Some("") => Ok(Value::Object(Map::new())),
        Some(raw) => serde_json::from_str(raw).map_err(|_| invalid_json()),
    }
}

/// Parses `body` and validates it against `schema`, reporting failures with
/// the body prefix.
pub fn validate_body(body: Option<&str>, schema: &ObjectSchema) -> Result<Value, ValidationError> {
    let value = parse_body(body)?;
    schema.validate(&value).map_err(ValidationError::in_body)?;
    Ok(value)
}
