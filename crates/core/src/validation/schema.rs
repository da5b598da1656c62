//! Declarative object schemas and the validator that walks them.
//!
//! Fields are checked in declaration order and validation stops at the first
//! violation. Keys that the schema does not declare are rejected after all
//! declared fields pass.

use serde_json::{Map, Value};

use super::error::ValidationError;
use super::formats::{
    is_email, is_numeric, is_phone_number, is_uri, is_uuid_v4, is_valid_park_code,
    NUMERIC_PATTERN, PARK_CODE_PATTERN, PHONE_PATTERN,
};

/// Label used when the payload itself has the wrong shape.
const ROOT_LABEL: &str = "value";

/// Format constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Any,
    Uuid4,
    Uri,
    Email,
    ParkCode,
    Numeric,
    Phone,
    Length(usize),
}

/// When a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Optional,
    Required,
    /// Required only when the named sibling key is present.
    RequiredWith(&'static str),
}

/// Type and format rule for a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    String {
        format: StringFormat,
        allow_empty: bool,
    },
    /// A JSON number, or a string holding one.
    Number {
        allow_empty: bool,
    },
    Array(Box<Rule>),
    Object(ObjectSchema),
    /// Any JSON value.
    Any,
}

impl Rule {
    /// A non-empty string.
    pub fn string() -> Self {
        Rule::String {
            format: StringFormat::Any,
            allow_empty: false,
        }
    }

    /// A string that may also be empty.
    pub fn text() -> Self {
        Rule::String {
            format: StringFormat::Any,
            allow_empty: true,
        }
    }

    pub fn array_of(items: Rule) -> Self {
        Rule::Array(Box::new(items))
    }

    pub fn object(fields: Vec<Field>) -> Self {
        Rule::Object(ObjectSchema::new(fields))
    }
}

/// A named key of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
    pub presence: Presence,
}

impl Field {
    /// An optional field with the given rule.
    pub fn new(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            presence: Presence::Optional,
        }
    }

    /// An optional, non-empty string field.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, Rule::string())
    }

    /// An optional string field that may be empty.
    pub fn text(name: &'static str) -> Self {
        Self::new(name, Rule::text())
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, Rule::Number { allow_empty: false })
    }

    pub fn array(name: &'static str, items: Rule) -> Self {
        Self::new(name, Rule::array_of(items))
    }

    pub fn object(name: &'static str, fields: Vec<Field>) -> Self {
        Self::new(name, Rule::object(fields))
    }

    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    pub fn required_with(mut self, sibling: &'static str) -> Self {
        self.presence = Presence::RequiredWith(sibling);
        self
    }

    /// Accepts the empty string in addition to the rule's normal values.
    pub fn allow_empty(mut self) -> Self {
        match &mut self.rule {
            Rule::String { allow_empty, .. } | Rule::Number { allow_empty } => *allow_empty = true,
            _ => {}
        }
        self
    }

    /// Sets the format of a string field.
    pub fn format(mut self, format: StringFormat) -> Self {
        if let Rule::String { format: f, .. } = &mut self.rule {
            *f = format;
        }
        self
    }
}

/// An object whose keys are exactly the declared fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub fields: Vec<Field>,
}

impl ObjectSchema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Validates `value` against this schema, reporting the first violation.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        check_object(self, value, "")
    }

    fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.name == key)
    }
}

fn child_label(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn violation(label: &str, problem: impl std::fmt::Display) -> ValidationError {
    let label = if label.is_empty() { ROOT_LABEL } else { label };
    ValidationError::new(format!("\"{label}\" {problem}"))
}

fn check_object(schema: &ObjectSchema, value: &Value, label: &str) -> Result<(), ValidationError> {
    let Value::Object(map) = value else {
        return Err(violation(label, "must be of type object"));
    };

    for field in &schema.fields {
        let field_label = child_label(label, field.name);
        match map.get(field.name) {
            Some(field_value) => check_rule(&field.rule, field_value, &field_label)?,
            None if is_required(field.presence, map) => {
                return Err(violation(&field_label, "is required"));
            }
            None => {}
        }
    }

    if let Some(unknown) = map.keys().find(|key| !schema.declares(key)) {
        return Err(violation(&child_label(label, unknown), "is not allowed"));
    }

    Ok(())
}

fn is_required(presence: Presence, siblings: &Map<String, Value>) -> bool {
    match presence {
        Presence::Optional => false,
        Presence::Required => true,
        Presence::RequiredWith(sibling) => siblings.contains_key(sibling),
    }
}

fn check_rule(rule: &Rule, value: &Value, label: &str) -> Result<(), ValidationError> {
    match rule {
        Rule::String {
            format,
            allow_empty,
        } => check_string(*format, *allow_empty, value, label),
        Rule::Number { allow_empty } => check_number(*allow_empty, value, label),
        Rule::Array(items) => {
            let Value::Array(elements) = value else {
                return Err(violation(label, "must be an array"));
            };
            elements
                .iter()
                .enumerate()
                .try_for_each(|(i, element)| check_rule(items, element, &format!("{label}[{i}]")))
        }
        Rule::Object(schema) => check_object(schema, value, label),
        Rule::Any => Ok(()),
    }
}

fn check_string(
    format: StringFormat,
    allow_empty: bool,
    value: &Value,
    label: &str,
) -> Result<(), ValidationError> {
    let Value::String(s) = value else {
        return Err(violation(label, "must be a string"));
    };

    if s.is_empty() {
        return if allow_empty {
            Ok(())
        } else {
            Err(violation(label, "is not allowed to be empty"))
        };
    }

    let pattern_mismatch = |pattern: &str| {
        violation(
            label,
            format!("with value \"{s}\" fails to match the required pattern: {pattern}"),
        )
    };

    match format {
        StringFormat::Any => Ok(()),
        StringFormat::Uuid4 if !is_uuid_v4(s) => Err(violation(label, "must be a valid GUID")),
        StringFormat::Uri if !is_uri(s) => Err(violation(label, "must be a valid uri")),
        StringFormat::Email if !is_email(s) => Err(violation(label, "must be a valid email")),
        StringFormat::ParkCode if !is_valid_park_code(s) => {
            Err(pattern_mismatch(PARK_CODE_PATTERN))
        }
        StringFormat::Numeric if !is_numeric(s) => Err(pattern_mismatch(NUMERIC_PATTERN)),
        StringFormat::Phone if !is_phone_number(s) => Err(pattern_mismatch(PHONE_PATTERN)),
        StringFormat::Length(n) if s.chars().count() != n => Err(violation(
            label,
            format!("length must be {n} characters long"),
        )),
        _ => Ok(()),
    }
}

fn check_number(allow_empty: bool, value: &Value, label: &str) -> Result<(), ValidationError> {
    match value {
        Value::Number(_) => Ok(()),
        Value::String(s) if s.is_empty() && allow_empty => Ok(()),
        Value::String(s) if is_finite_number(s.trim()) => Ok(()),
        _ => Err(violation(label, "must be a number")),
    }
}

/// Numeric text that also fits in a finite `f64`.
fn is_finite_number(s: &str) -> bool {
    is_numeric(s) && s.parse::<f64>().is_ok_and(f64::is_finite)
}
