//! Fixed seed sets per record kind
//!
//! Sample/demo data only: stores are volatile and reseeded on every
//! process start.

use crate::model::{
    DocType, HealthcareProvider, NetworkVariable, NwVarDirection, NwVarType, NwVarUse,
};

/// Sample healthcare-provider directory entries
pub fn sample_providers() -> Vec<HealthcareProvider> {
    vec![
        HealthcareProvider {
            id: 1,
            first_name: "Hilde".into(),
            name: "Janssens".into(),
            address: "Geneeskundestraat 1, 1000 Brussel".into(),
            doc_type: DocType::Dokter,
            request_counter: 3,
            active: true,
        },
        HealthcareProvider {
            id: 2,
            first_name: "Mark".into(),
            name: "Peeters".into(),
            address: "Dierenlaan 14, 2000 Antwerpen".into(),
            doc_type: DocType::Dierenarts,
            request_counter: 0,
            active: false,
        },
        HealthcareProvider {
            id: 3,
            first_name: "An".into(),
            name: "De Smet".into(),
            address: "Zorgstraat 8, 9000 Gent".into(),
            doc_type: DocType::Verpleegster,
            request_counter: 1,
            active: true,
        },
    ]
}

/// Sample PLC network-variable mappings
pub fn sample_network_variables() -> Vec<NetworkVariable> {
    vec![
        NetworkVariable {
            id: 1,
            plc: "Garage".into(),
            name: "clp_living".into(),
            description: "Licht Living".into(),
            var_type: NwVarType::Bool,
            direction: NwVarDirection::In,
            use_kind: NwVarUse::Button,
            address: 0,
        },
        NetworkVariable {
            id: 2,
            plc: "Garage".into(),
            name: "rl_pct_bureau".into(),
            description: "Opening pct rolluik Bureau vooraan".into(),
            var_type: NwVarType::Byte,
            direction: NwVarDirection::In,
            use_kind: NwVarUse::OpeningRolluikPct,
            address: 1,
        },
        NetworkVariable {
            id: 3,
            plc: "Liftkoker".into(),
            name: "garage_poort_motor".into(),
            description: "Activatie motor garage poort".into(),
            var_type: NwVarType::Bool,
            direction: NwVarDirection::Out,
            use_kind: NwVarUse::Motor,
            address: 10,
        },
    ]
}
