//! Observability for tabledb
//!
//! Structured JSON logging of store mutations. Logs are synchronous and
//! unbuffered: one log line is one event, with deterministic key ordering.

mod events;
mod logger;

pub use events::Event;
pub(crate) use events::{
    record_added, record_deleted, record_updated, store_seeded, validation_rejected,
};
pub use logger::{Logger, Severity};
