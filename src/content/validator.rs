//! Schema validation for raw content records.
//!
//! Raw front matter is checked field by field against the collection's
//! declared `Schema` and every violation is collected, so an author sees all
//! problems of a record in one pass. Only a record with no violation is
//! deserialized into its typed struct.

use crate::content::schema::{Collection, TypedRecord};
use crate::i18n::LocaleRegistry;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

// ==================== Schema Declarations ====================

/// Expected shape of a single field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    TextList,
    /// Any finite number
    Number,
    Boolean,
    /// String restricted to a closed set of values
    Choice(&'static [&'static str]),
    /// Code of a supported locale
    Locale,
    /// Absolute URL
    Url,
    Object(&'static Schema),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Declared fields of an object. A closed schema rejects undeclared keys.
#[derive(Debug)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
    pub closed: bool,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

// ==================== Errors ====================

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("required field is missing")]
    Missing,

    #[error("unknown field")]
    UnknownField,

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value {found:?}, expected one of: {}", .allowed.join(", "))]
    InvalidChoice {
        found: String,
        allowed: Vec<&'static str>,
    },

    #[error("invalid URL {0:?}")]
    InvalidUrl(String),

    #[error("{0}")]
    Malformed(String),
}

/// A violated constraint, located by its field path (e.g., `links.github`,
/// `tech[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// Every violation found in one record. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths of the offending fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|error| error.field.as_str()).collect()
    }

    /// Find the error reported for a field path.
    pub fn get(&self, field: &str) -> Option<&FieldErrorKind> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| &error.kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ==================== Validation ====================

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_url(value: &str) -> bool {
    let regex = URL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s/?#]+[^\s]*$").unwrap());
    regex.is_match(value)
}

/// Validate a raw record against its collection schema.
///
/// Open schemas (projects) drop undeclared keys; closed ones report them.
/// Defaults are applied to absent optional fields.
pub fn validate(kind: Collection, raw: &Value) -> Result<TypedRecord, ValidationErrors> {
    let errors = check_schema(kind.schema(), raw);
    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    let typed = match kind {
        Collection::Projects => serde_json::from_value(raw.clone()).map(TypedRecord::Project),
        Collection::Experiences => {
            serde_json::from_value(raw.clone()).map(TypedRecord::Experience)
        }
        Collection::Education => serde_json::from_value(raw.clone()).map(TypedRecord::Education),
    };

    typed.map_err(|e| {
        ValidationErrors(vec![FieldError::new(
            ROOT_PATH,
            FieldErrorKind::Malformed(e.to_string()),
        )])
    })
}

/// Collect every violation of `schema` in `value`.
pub fn check_schema(schema: &Schema, value: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_object(schema, value, "", &mut errors);
    errors
}

/// Path used for errors about the record as a whole
const ROOT_PATH: &str = "(record)";

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_object(schema: &Schema, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
    let map: &Map<String, Value> = match value.as_object() {
        Some(map) => map,
        None => {
            let location = if path.is_empty() { ROOT_PATH } else { path };
            errors.push(FieldError::new(
                location,
                FieldErrorKind::TypeMismatch {
                    expected: "object",
                    found: type_name(value),
                },
            ));
            return;
        }
    };

    for field in schema.fields {
        let field_path = join_path(path, field.name);
        match map.get(field.name) {
            Some(field_value) => check_value(&field.kind, field_value, &field_path, errors),
            None if field.required => {
                errors.push(FieldError::new(field_path, FieldErrorKind::Missing))
            }
            None => {}
        }
    }

    if schema.closed {
        for key in map.keys() {
            if schema.field(key).is_none() {
                errors.push(FieldError::new(
                    join_path(path, key),
                    FieldErrorKind::UnknownField,
                ));
            }
        }
    }
}

fn check_value(kind: &FieldKind, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
    let mismatch = |expected: &'static str| {
        FieldError::new(
            path,
            FieldErrorKind::TypeMismatch {
                expected,
                found: type_name(value),
            },
        )
    };

    match kind {
        FieldKind::Text => {
            if !value.is_string() {
                errors.push(mismatch("string"));
            }
        }
        FieldKind::TextList => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        errors.push(FieldError::new(
                            format!("{}[{}]", path, index),
                            FieldErrorKind::TypeMismatch {
                                expected: "string",
                                found: type_name(item),
                            },
                        ));
                    }
                }
            }
            None => errors.push(mismatch("array of strings")),
        },
        FieldKind::Number => {
            if !value.as_f64().is_some_and(f64::is_finite) {
                errors.push(mismatch("number"));
            }
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                errors.push(mismatch("boolean"));
            }
        }
        FieldKind::Choice(allowed) => match value.as_str() {
            Some(found) if allowed.iter().any(|value| *value == found) => {}
            Some(found) => errors.push(FieldError::new(
                path,
                FieldErrorKind::InvalidChoice {
                    found: found.to_string(),
                    allowed: allowed.to_vec(),
                },
            )),
            None => errors.push(mismatch("string")),
        },
        FieldKind::Locale => match value.as_str() {
            Some(found) if LocaleRegistry::get().is_supported(found) => {}
            Some(found) => errors.push(FieldError::new(
                path,
                FieldErrorKind::InvalidChoice {
                    found: found.to_string(),
                    allowed: LocaleRegistry::get().codes(),
                },
            )),
            None => errors.push(mismatch("string")),
        },
        FieldKind::Url => match value.as_str() {
            Some(found) if is_url(found) => {}
            Some(found) => errors.push(FieldError::new(
                path,
                FieldErrorKind::InvalidUrl(found.to_string()),
            )),
            None => errors.push(mismatch("string")),
        },
        FieldKind::Object(schema) => check_object(schema, value, path, errors),
    }
}
