//! The Record trait shared by all stored record kinds

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{validate_partial, RecordSchema, SchemaError, SchemaResult};

/// Record identifier assigned by the owning store
pub type RecordId = i64;

/// Sentinel id for records not yet owned by a store
pub const UNASSIGNED_ID: RecordId = -1;

/// A record kind that can be held by a [`RecordStore`].
///
/// Implementations provide the wire-shape schema and id access; partial
/// construction and serialization come for free.
///
/// [`RecordStore`]: crate::store::RecordStore
pub trait Record: Clone + std::fmt::Debug + Serialize + DeserializeOwned {
    /// Record kind identifier used in errors and log events
    const KIND: &'static str;

    /// Returns the wire-shape schema for this record kind
    fn schema() -> RecordSchema;

    /// Returns the record id
    fn id(&self) -> RecordId;

    /// Overwrites the record id (stores only)
    fn set_id(&mut self, id: RecordId);

    /// Builds a fully-populated record from a partial value.
    ///
    /// Absent fields fall back to schema defaults; every rule violation
    /// in `input` is reported in the returned error.
    fn from_partial(input: &Value) -> SchemaResult<Self> {
        let merged = validate_partial(&Self::schema(), input)?;
        serde_json::from_value(merged)
            .map_err(|e| SchemaError::malformed_record(Self::KIND, e.to_string()))
    }

    /// Serializes the record to its wire shape
    fn to_value(&self) -> SchemaResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| SchemaError::malformed_record(Self::KIND, e.to_string()))
    }
}
