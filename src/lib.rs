//! tabledb - a strict, in-memory table store for schema-validated records
//!
//! Two record kinds are shipped: healthcare-provider directory entries and
//! PLC network-variable mappings. Both flow through the same pipeline:
//! a declarative schema validates partial input, a typed record carries the
//! data, and a [`store::RecordStore`] owns the collection and its id index.

pub mod model;
pub mod observability;
pub mod schema;
pub mod store;
