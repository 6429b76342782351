//! Record Store subsystem
//!
//! In-memory owner of one record collection, exposing CRUD operations.
//!
//! # Invariants
//!
//! - Ids are unique within a store at all times
//! - `add` assigns ids itself: max existing id + 1, or 1 when empty
//! - Listing order is insertion order
//! - Lookups go through the id index, never a linear scan
//! - Update and delete of an absent id fail with an explicit not-found error
//!   and leave the store untouched

mod errors;
mod seed;
mod store;

pub use errors::{StoreError, StoreResult};
pub use seed::{sample_network_variables, sample_providers};
pub use store::RecordStore;
