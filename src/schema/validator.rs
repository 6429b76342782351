//! Pure validation functions for records
//!
//! Validation semantics:
//! - Every declared rule is checked; all violations are reported together
//! - Undeclared fields are rejected
//! - No implicit type coercion, no null values
//! - `validate_partial` fills defaults; fields without a default are required
//!
//! Validators never mutate their input and are deterministic.

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::{FieldDef, FieldType, RecordSchema};

/// Validates a partial record and produces the fully-populated record value.
///
/// Fields absent from `input` fall back to their schema default; absent
/// fields without a default are violations. The returned object contains
/// exactly the schema's fields.
///
/// # Errors
///
/// Returns `TDB_MALFORMED_RECORD` when `input` is not an object, or
/// `TDB_SCHEMA_VALIDATION_FAILED` listing every violated field.
pub fn validate_partial(schema: &RecordSchema, input: &Value) -> SchemaResult<Value> {
    let obj = as_record_object(schema, input)?;

    let mut merged = Map::new();
    let mut violations = Vec::new();

    for def in &schema.fields {
        match obj.get(def.name) {
            Some(value) => {
                if let Some(details) = check_value(def, value) {
                    violations.push(details);
                } else {
                    merged.insert(def.name.to_string(), value.clone());
                }
            }
            None => match &def.default {
                Some(default) => {
                    merged.insert(def.name.to_string(), default.clone());
                }
                None => violations.push(ValidationDetails::missing_field(def.name)),
            },
        }
    }

    collect_undeclared(schema, obj, &mut violations);

    if violations.is_empty() {
        Ok(Value::Object(merged))
    } else {
        Err(SchemaError::validation_failed(schema.record_kind, violations))
    }
}

/// Validates a complete record value against the schema rules.
///
/// Unlike [`validate_partial`], no defaults are applied: every declared
/// field must be present. Used to re-check records before an update commit.
pub fn validate_record(schema: &RecordSchema, record: &Value) -> SchemaResult<()> {
    let obj = as_record_object(schema, record)?;

    let mut violations = Vec::new();

    for def in &schema.fields {
        match obj.get(def.name) {
            Some(value) => {
                if let Some(details) = check_value(def, value) {
                    violations.push(details);
                }
            }
            None => violations.push(ValidationDetails::missing_field(def.name)),
        }
    }

    collect_undeclared(schema, obj, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::validation_failed(schema.record_kind, violations))
    }
}

fn as_record_object<'a>(
    schema: &RecordSchema,
    value: &'a Value,
) -> SchemaResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        SchemaError::malformed_record(
            schema.record_kind,
            format!("expected object, got {}", json_type_name(value)),
        )
    })
}

fn collect_undeclared(
    schema: &RecordSchema,
    obj: &Map<String, Value>,
    violations: &mut Vec<ValidationDetails>,
) {
    for key in obj.keys() {
        if schema.field(key).is_none() {
            violations.push(ValidationDetails::undeclared_field(key));
        }
    }
}

/// Checks one value against its field definition.
///
/// Returns the violation, or None when the value conforms.
fn check_value(def: &FieldDef, value: &Value) -> Option<ValidationDetails> {
    if value.is_null() {
        return Some(ValidationDetails::new(def.name, "non-null value", "null"));
    }

    match &def.field_type {
        FieldType::String { min_len } => match value.as_str() {
            Some(s) => {
                let len = s.chars().count();
                if len < *min_len {
                    Some(ValidationDetails::too_short(def.name, *min_len, len))
                } else {
                    None
                }
            }
            None => Some(ValidationDetails::type_mismatch(
                def.name,
                "string",
                json_type_name(value),
            )),
        },
        FieldType::Int { min } => match value.as_i64() {
            Some(n) => match min {
                Some(min) if n < *min => {
                    Some(ValidationDetails::below_minimum(def.name, *min, n))
                }
                _ => None,
            },
            None => Some(ValidationDetails::type_mismatch(
                def.name,
                "int",
                json_type_name(value),
            )),
        },
        FieldType::Bool => {
            if value.is_boolean() {
                None
            } else {
                Some(ValidationDetails::type_mismatch(
                    def.name,
                    "bool",
                    json_type_name(value),
                ))
            }
        }
        FieldType::Enum { variants } => match value.as_str() {
            Some(s) if variants.contains(&s) => None,
            Some(s) => Some(ValidationDetails::out_of_domain(def.name, variants, s)),
            None => Some(ValidationDetails::type_mismatch(
                def.name,
                "enum (string)",
                json_type_name(value),
            )),
        },
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
