//! Healthcare-provider directory entries

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use super::record::{Record, RecordId, UNASSIGNED_ID};
use crate::schema::{FieldDef, RecordSchema};

/// Kind of practitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Dokter,
    Dierenarts,
    #[serde(rename = "verpleeg(st)er")]
    Verpleegster,
    Bioloog,
}

impl DocType {
    /// Accepted wire values, in declaration order
    pub const VALUES: &'static [&'static str] =
        &["dokter", "dierenarts", "verpleeg(st)er", "bioloog"];

    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Dokter => "dokter",
            DocType::Dierenarts => "dierenarts",
            DocType::Verpleegster => "verpleeg(st)er",
            DocType::Bioloog => "bioloog",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the healthcare-provider directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcareProvider {
    /// Unique id, assigned by the store on add
    pub id: RecordId,
    pub first_name: String,
    pub name: String,
    pub address: String,
    pub doc_type: DocType,
    /// Number of pending requests, never negative
    pub request_counter: i64,
    pub active: bool,
}

impl Default for HealthcareProvider {
    fn default() -> Self {
        Self {
            id: UNASSIGNED_ID,
            first_name: "Dokter".into(),
            name: "Familienaam".into(),
            address: "Geneeskundestraat 1, 1000 Brussel".into(),
            doc_type: DocType::Dokter,
            request_counter: 0,
            active: false,
        }
    }
}

impl Record for HealthcareProvider {
    const KIND: &'static str = "healthcare_provider";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            Self::KIND,
            vec![
                FieldDef::int("id").with_default(json!(UNASSIGNED_ID)),
                FieldDef::string("firstName", 2).with_default(json!("Dokter")),
                FieldDef::string("name", 3).with_default(json!("Familienaam")),
                FieldDef::string("address", 1)
                    .with_default(json!("Geneeskundestraat 1, 1000 Brussel")),
                FieldDef::enumeration("docType", DocType::VALUES).with_default(json!("dokter")),
                FieldDef::non_negative_int("requestCounter").with_default(json!(0)),
                FieldDef::bool("active").with_default(json!(false)),
            ],
        )
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
