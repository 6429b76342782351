//! Schema Validation Tests
//!
//! Tests for the record schema contract:
//! - Defaults merged with supplied fields reproduce the documented record
//! - Every violated field is reported, in schema field order
//! - Enumerated fields accept only their declared domain
//! - Validation is pure and deterministic

use serde_json::json;
use tabledb::model::{DocType, HealthcareProvider, NetworkVariable, Record, UNASSIGNED_ID};
use tabledb::schema::{validate_partial, SchemaErrorCode};

// =============================================================================
// Default Merging
// =============================================================================

/// An empty partial yields the fully-defaulted provider record.
#[test]
fn test_provider_defaults() {
    let provider = HealthcareProvider::from_partial(&json!({})).unwrap();

    assert_eq!(provider.id, UNASSIGNED_ID);
    assert_eq!(provider.first_name, "Dokter");
    assert_eq!(provider.name, "Familienaam");
    assert_eq!(provider.address, "Geneeskundestraat 1, 1000 Brussel");
    assert_eq!(provider.doc_type, DocType::Dokter);
    assert_eq!(provider.request_counter, 0);
    assert!(!provider.active);
}

/// Supplied fields win over defaults; untouched fields keep theirs.
#[test]
fn test_supplied_fields_override_defaults() {
    let provider = HealthcareProvider::from_partial(&json!({
        "firstName": "Hilde",
        "active": true
    }))
    .unwrap();

    assert_eq!(provider.first_name, "Hilde");
    assert!(provider.active);
    assert_eq!(provider.name, "Familienaam");
    assert_eq!(provider.doc_type, DocType::Dokter);
}

/// Network variables default only their enumerated fields.
#[test]
fn test_network_variable_required_fields_have_no_defaults() {
    let err = NetworkVariable::from_partial(&json!({})).unwrap_err();
    let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["plc", "name", "description", "address"]);
}

// =============================================================================
// Enumerated Domains
// =============================================================================

/// A value outside the enumeration fails construction; no record is produced.
#[test]
fn test_enum_value_outside_domain_fails() {
    let result = HealthcareProvider::from_partial(&json!({ "docType": "tandarts" }));
    let err = result.unwrap_err();
    assert_eq!(err.code().code(), "TDB_SCHEMA_VALIDATION_FAILED");
    assert_eq!(err.violations().len(), 1);
    assert!(err.violations()[0].expected.contains("dokter"));
}

/// Every declared doc type literal is accepted.
#[test]
fn test_all_doc_type_literals_accepted() {
    for literal in DocType::VALUES {
        let provider =
            HealthcareProvider::from_partial(&json!({ "docType": literal })).unwrap();
        assert_eq!(provider.doc_type.as_str(), *literal);
    }
}

/// Enum fields reject non-string values outright.
#[test]
fn test_enum_field_rejects_non_string() {
    let err = HealthcareProvider::from_partial(&json!({ "docType": 3 })).unwrap_err();
    assert_eq!(err.violations()[0].field, "docType");
    assert_eq!(err.violations()[0].actual, "int");
}

// =============================================================================
// Violation Reporting
// =============================================================================

/// A multiply-invalid input reports every violated field together.
#[test]
fn test_every_violation_reported() {
    let err = NetworkVariable::from_partial(&json!({
        "plc": "",
        "name": "x",
        "description": "y",
        "type": "word",
        "direction": "up",
        "address": -1
    }))
    .unwrap_err();

    let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["plc", "type", "direction", "address"]);
}

/// Undeclared fields are violations, not silently dropped.
#[test]
fn test_undeclared_field_is_a_violation() {
    let err = HealthcareProvider::from_partial(&json!({ "nickName": "Hil" })).unwrap_err();
    assert!(err.violations().iter().any(|v| v.field == "nickName"));
}

/// Non-object input is malformed rather than a per-field failure.
#[test]
fn test_non_object_input_is_malformed() {
    let err = HealthcareProvider::from_partial(&json!("not a record")).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::TdbMalformedRecord);
}

// =============================================================================
// Purity and Determinism
// =============================================================================

/// Validation never mutates its input.
#[test]
fn test_validation_has_no_side_effects() {
    let input = json!({ "firstName": "H" });
    let snapshot = input.clone();

    let _ = validate_partial(&HealthcareProvider::schema(), &input);

    assert_eq!(input, snapshot);
}

/// The same input validates identically every time.
#[test]
fn test_validation_is_deterministic() {
    let input = json!({ "firstName": "Hilde", "docType": "bioloog" });
    let first = HealthcareProvider::from_partial(&input).unwrap();
    for _ in 0..100 {
        assert_eq!(HealthcareProvider::from_partial(&input).unwrap(), first);
    }
}
