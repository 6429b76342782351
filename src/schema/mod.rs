//! Record schemas for tabledb
//!
//! A schema is a plain data-shape description: field names, types, defaults
//! and value domains. Validation lives in [`validator`] as pure functions,
//! so the shape description carries no behavior of its own.

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity, ValidationDetails};
pub use types::{FieldDef, FieldType, RecordSchema};
pub use validator::{validate_partial, validate_record};
