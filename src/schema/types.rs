//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string with a minimum length
//! - int: 64-bit signed integer with an optional lower bound
//! - bool: Boolean
//! - enum: one of a finite set of string literals

use serde_json::Value;

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string, at least `min_len` characters
    String {
        /// Minimum length in characters
        min_len: usize,
    },
    /// 64-bit signed integer, at least `min` if set
    Int {
        /// Inclusive lower bound
        min: Option<i64>,
    },
    /// Boolean
    Bool,
    /// One of a fixed set of string literals
    Enum {
        /// Accepted literal values
        variants: &'static [&'static str],
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } => "string",
            FieldType::Int { .. } => "int",
            FieldType::Bool => "bool",
            FieldType::Enum { .. } => "enum",
        }
    }
}

/// One field in a record schema
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name as it appears on the wire
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
    /// Value used when the field is absent from a partial record.
    /// Fields without a default are required.
    pub default: Option<Value>,
}

impl FieldDef {
    /// Create a string field with a minimum length
    pub fn string(name: &'static str, min_len: usize) -> Self {
        Self {
            name,
            field_type: FieldType::String { min_len },
            default: None,
        }
    }

    /// Create an unbounded int field
    pub fn int(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Int { min: None },
            default: None,
        }
    }

    /// Create an int field that rejects negative values
    pub fn non_negative_int(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Int { min: Some(0) },
            default: None,
        }
    }

    /// Create a bool field
    pub fn bool(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Bool,
            default: None,
        }
    }

    /// Create an enum field over a fixed set of literals
    pub fn enumeration(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self {
            name,
            field_type: FieldType::Enum { variants },
            default: None,
        }
    }

    /// Attach a default value, making the field optional in partial records
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Complete schema for one record kind
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Record kind identifier (e.g. "healthcare_provider")
    pub record_kind: &'static str,
    /// Field definitions in declaration order
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Create a new schema
    pub fn new(record_kind: &'static str, fields: Vec<FieldDef>) -> Self {
        Self {
            record_kind,
            fields,
        }
    }

    /// Looks up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates the schema structure itself (not a record)
    ///
    /// Every schema must declare an int `id` field, and field names
    /// must be unique.
    pub fn validate_structure(&self) -> Result<(), String> {
        match self.field("id") {
            Some(def) => {
                if !matches!(def.field_type, FieldType::Int { .. }) {
                    return Err("'id' field must be an int".into());
                }
            }
            None => return Err("schema must define an 'id' field".into()),
        }

        for (i, def) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|other| other.name == def.name) {
                return Err(format!("duplicate field '{}'", def.name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> RecordSchema {
        RecordSchema::new(
            "sample",
            vec![
                FieldDef::int("id").with_default(json!(-1)),
                FieldDef::string("name", 3),
                FieldDef::non_negative_int("count").with_default(json!(0)),
            ],
        )
    }

    #[test]
    fn test_schema_structure_valid() {
        assert!(sample_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_schema_missing_id_field() {
        let schema = RecordSchema::new("sample", vec![FieldDef::string("name", 1)]);
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_schema_id_must_be_int() {
        let schema = RecordSchema::new("sample", vec![FieldDef::string("id", 1)]);
        let result = schema.validate_structure();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("int"));
    }

    #[test]
    fn test_schema_rejects_duplicate_fields() {
        let schema = RecordSchema::new(
            "sample",
            vec![
                FieldDef::int("id"),
                FieldDef::string("name", 1),
                FieldDef::string("name", 2),
            ],
        );
        let result = schema.validate_structure();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("name"));
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample_schema();
        assert!(schema.field("name").is_some());
        assert!(schema.field("unknown").is_none());
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String { min_len: 1 }.type_name(), "string");
        assert_eq!(FieldType::Int { min: None }.type_name(), "int");
        assert_eq!(FieldType::Bool.type_name(), "bool");
        assert_eq!(FieldType::Enum { variants: &[] }.type_name(), "enum");
    }

    #[test]
    fn test_default_makes_field_optional() {
        let def = FieldDef::string("name", 3).with_default(json!("Familienaam"));
        assert_eq!(def.default, Some(json!("Familienaam")));
    }
}
