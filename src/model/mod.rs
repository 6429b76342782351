//! Typed record definitions
//!
//! Each record kind is a plain serde struct plus a [`RecordSchema`] that
//! describes its wire shape. The [`Record`] trait ties the two together
//! and is what [`crate::store::RecordStore`] is generic over.
//!
//! [`RecordSchema`]: crate::schema::RecordSchema

mod network_variable;
mod provider;
mod record;

pub use network_variable::{NetworkVariable, NwVarDirection, NwVarType, NwVarUse};
pub use provider::{DocType, HealthcareProvider};
pub use record::{Record, RecordId, UNASSIGNED_ID};
