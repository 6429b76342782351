//! PLC network-variable mappings
//!
//! A network variable maps a named PLC signal onto a bus address. The
//! `plc` field is a free-text name reference; referential integrity
//! against a PLC inventory is deliberately not enforced.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use super::record::{Record, RecordId, UNASSIGNED_ID};
use crate::schema::{FieldDef, RecordSchema};

/// Value type carried by a network variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NwVarType {
    Bool,
    Byte,
}

impl NwVarType {
    pub const VALUES: &'static [&'static str] = &["bool", "byte"];

    pub fn as_str(&self) -> &'static str {
        match self {
            NwVarType::Bool => "bool",
            NwVarType::Byte => "byte",
        }
    }
}

impl fmt::Display for NwVarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signal direction, seen from the PLC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NwVarDirection {
    In,
    Out,
}

impl NwVarDirection {
    pub const VALUES: &'static [&'static str] = &["in", "out"];

    pub fn as_str(&self) -> &'static str {
        match self {
            NwVarDirection::In => "in",
            NwVarDirection::Out => "out",
        }
    }
}

impl fmt::Display for NwVarDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the signal drives or reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NwVarUse {
    Button,
    Motor,
    OpeningRolluikPct,
}

impl NwVarUse {
    pub const VALUES: &'static [&'static str] = &["button", "motor", "opening_rolluik_pct"];

    pub fn as_str(&self) -> &'static str {
        match self {
            NwVarUse::Button => "button",
            NwVarUse::Motor => "motor",
            NwVarUse::OpeningRolluikPct => "opening_rolluik_pct",
        }
    }
}

impl fmt::Display for NwVarUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One PLC network-variable mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkVariable {
    /// Unique id, assigned by the store on add
    pub id: RecordId,
    /// PLC name reference (free text)
    pub plc: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub var_type: NwVarType,
    pub direction: NwVarDirection,
    #[serde(rename = "use")]
    pub use_kind: NwVarUse,
    /// Bus address, meant to be unique per PLC but not enforced
    pub address: i64,
}

impl Record for NetworkVariable {
    const KIND: &'static str = "network_variable";

    fn schema() -> RecordSchema {
        RecordSchema::new(
            Self::KIND,
            vec![
                FieldDef::int("id").with_default(json!(UNASSIGNED_ID)),
                FieldDef::string("plc", 1),
                FieldDef::string("name", 1),
                FieldDef::string("description", 1),
                FieldDef::enumeration("type", NwVarType::VALUES).with_default(json!("bool")),
                FieldDef::enumeration("direction", NwVarDirection::VALUES)
                    .with_default(json!("in")),
                FieldDef::enumeration("use", NwVarUse::VALUES).with_default(json!("button")),
                FieldDef::non_negative_int("address"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_structure_is_valid() {
        assert!(NetworkVariable::schema().validate_structure().is_ok());
    }

    #[test]
    fn test_minimal_partial_fills_enum_defaults() {
        let var = NetworkVariable::from_partial(&json!({
            "plc": "Garage",
            "name": "clp_living",
            "description": "Licht Living",
            "address": 0
        }))
        .unwrap();
        assert_eq!(var.id, UNASSIGNED_ID);
        assert_eq!(var.var_type, NwVarType::Bool);
        assert_eq!(var.direction, NwVarDirection::In);
        assert_eq!(var.use_kind, NwVarUse::Button);
    }

    #[test]
    fn test_plc_name_description_and_address_are_required() {
        let err = NetworkVariable::from_partial(&json!({})).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["plc", "name", "description", "address"]);
    }

    #[test]
    fn test_negative_address_rejected() {
        let err = NetworkVariable::from_partial(&json!({
            "plc": "Garage",
            "name": "x",
            "description": "y",
            "address": -1
        }))
        .unwrap_err();
        assert_eq!(err.violations()[0].field, "address");
    }

    #[test]
    fn test_use_outside_domain_rejected() {
        let err = NetworkVariable::from_partial(&json!({
            "plc": "Garage",
            "name": "x",
            "description": "y",
            "address": 0,
            "use": "heater"
        }))
        .unwrap_err();
        assert_eq!(err.violations()[0].field, "use");
        assert!(err.violations()[0].expected.contains("opening_rolluik_pct"));
    }

    #[test]
    fn test_wire_round_trip_uses_reserved_names() {
        let var = NetworkVariable::from_partial(&json!({
            "plc": "Liftkoker",
            "name": "garage_poort_motor",
            "description": "Activatie motor garage poort",
            "type": "bool",
            "direction": "out",
            "use": "motor",
            "address": 10
        }))
        .unwrap();

        let value = var.to_value().unwrap();
        assert_eq!(value["type"], json!("bool"));
        assert_eq!(value["use"], json!("motor"));

        let back: NetworkVariable = serde_json::from_value(value).unwrap();
        assert_eq!(back, var);
    }
}
