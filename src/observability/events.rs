//! Observable store events
//!
//! Every committed store mutation emits exactly one INFO event; every
//! rejected mutation emits one WARN event. Events are explicit and typed.

use super::logger::Logger;
use crate::model::RecordId;
use crate::schema::SchemaError;

/// Observable events in tabledb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Store created from a seed set
    StoreSeeded,
    /// Record validated and appended
    RecordAdded,
    /// Existing record overwritten field-wise
    RecordUpdated,
    /// Record removed
    RecordDeleted,
    /// Incoming record rejected by validation
    ValidationRejected,
}

impl Event {
    /// Returns the event name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Event::StoreSeeded => "store_seeded",
            Event::RecordAdded => "record_added",
            Event::RecordUpdated => "record_updated",
            Event::RecordDeleted => "record_deleted",
            Event::ValidationRejected => "validation_rejected",
        }
    }
}

pub(crate) fn store_seeded(kind: &str, records: usize) {
    Logger::info(
        Event::StoreSeeded.name(),
        &[("kind", kind), ("records", &records.to_string())],
    );
}

pub(crate) fn record_added(kind: &str, id: RecordId) {
    Logger::info(
        Event::RecordAdded.name(),
        &[("kind", kind), ("id", &id.to_string())],
    );
}

pub(crate) fn record_updated(kind: &str, id: RecordId) {
    Logger::info(
        Event::RecordUpdated.name(),
        &[("kind", kind), ("id", &id.to_string())],
    );
}

pub(crate) fn record_deleted(kind: &str, id: RecordId) {
    Logger::info(
        Event::RecordDeleted.name(),
        &[("kind", kind), ("id", &id.to_string())],
    );
}

pub(crate) fn validation_rejected(kind: &str, error: &SchemaError) {
    Logger::warn(
        Event::ValidationRejected.name(),
        &[("kind", kind), ("reason", error.message())],
    );
}
