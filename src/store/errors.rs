//! Record store errors

use thiserror::Error;

use crate::model::RecordId;
use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("{kind} record with id {id} not found")]
    RecordNotFound { kind: &'static str, id: RecordId },

    #[error("duplicate id {id} in {kind} seed set")]
    DuplicateId { kind: &'static str, id: RecordId },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl StoreError {
    /// Returns true when the error is a stale-reference miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::RecordNotFound { .. })
    }
}
