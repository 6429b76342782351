//! Schema error types
//!
//! Error codes:
//! - TDB_SCHEMA_VALIDATION_FAILED (REJECT)
//! - TDB_MALFORMED_RECORD (REJECT)
//! - TDB_INVALID_SCHEMA (FATAL)

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller input rejected; retry with corrected values
    Reject,
    /// Programmer error in a schema definition
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// One or more fields violate the schema rules
    TdbSchemaValidationFailed,
    /// Input is not a record-shaped object at all
    TdbMalformedRecord,
    /// The schema definition itself is broken
    TdbInvalidSchema,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::TdbSchemaValidationFailed => "TDB_SCHEMA_VALIDATION_FAILED",
            SchemaErrorCode::TdbMalformedRecord => "TDB_MALFORMED_RECORD",
            SchemaErrorCode::TdbInvalidSchema => "TDB_INVALID_SCHEMA",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::TdbInvalidSchema => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One violated field in a rejected record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field name
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn undeclared_field(field: impl Into<String>) -> Self {
        Self::new(field, "no undeclared fields", "extra field present")
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn too_short(field: impl Into<String>, min_len: usize, actual_len: usize) -> Self {
        Self::new(
            field,
            format!("string of at least {} character(s)", min_len),
            format!("{} character(s)", actual_len),
        )
    }

    pub fn below_minimum(field: impl Into<String>, min: i64, actual: i64) -> Self {
        Self::new(field, format!("int >= {}", min), actual.to_string())
    }

    pub fn out_of_domain(field: impl Into<String>, variants: &[&str], actual: &str) -> Self {
        Self::new(
            field,
            format!("one of [{}]", variants.join(", ")),
            format!("'{}'", actual),
        )
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Schema error carrying every violated field
#[derive(Debug, Clone)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    record_kind: &'static str,
    violations: Vec<ValidationDetails>,
}

impl SchemaError {
    /// Create a validation failure listing all violated fields
    pub fn validation_failed(record_kind: &'static str, violations: Vec<ValidationDetails>) -> Self {
        Self {
            code: SchemaErrorCode::TdbSchemaValidationFailed,
            message: format!(
                "{} record rejected with {} violation(s)",
                record_kind,
                violations.len()
            ),
            record_kind,
            violations,
        }
    }

    /// Create an error for input that is not a record-shaped object
    pub fn malformed_record(record_kind: &'static str, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::TdbMalformedRecord,
            message: format!("malformed {} record: {}", record_kind, reason.into()),
            record_kind,
            violations: Vec::new(),
        }
    }

    /// Create an error for a broken schema definition (programmer error)
    pub fn invalid_schema(record_kind: &'static str, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::TdbInvalidSchema,
            message: format!("invalid {} schema: {}", record_kind, reason.into()),
            record_kind,
            violations: Vec::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the record kind the error applies to
    pub fn record_kind(&self) -> &'static str {
        self.record_kind
    }

    /// Returns every violated field, in schema field order
    pub fn violations(&self) -> &[ValidationDetails] {
        &self.violations
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        for details in &self.violations {
            write!(f, "; {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
