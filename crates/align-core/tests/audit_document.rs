//! Serde shape and JsonSchema validation tests for the audit document types.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

use align_core::Description;
use align_core::entities::{MigrationPlan, ProvenanceRecord};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_plan() -> MigrationPlan {
    MigrationPlan {
        name: "PlanX".into(),
        id: 12,
        records: vec![ProvenanceRecord {
            name: "Login works".into(),
            new_id: 42,
            old_id: 7,
            link_type: "Related".into(),
            link_comment: "TF237027 migrated".into(),
            old_history: "did work".into(),
            old_description: Description::Rich(json!({"steps": ["open", "click"]})),
            old_area_path: r"ProjA\Team1\Sub".into(),
        }],
    }
}

#[test]
fn plan_serializes_with_audit_field_names() {
    let value = serde_json::to_value(sample_plan()).unwrap();

    assert_eq!(
        value,
        json!({
            "TestPlanName": "PlanX",
            "ID": 12,
            "TestCases": [{
                "Name": "Login works",
                "NewID": "42",
                "OldID": "7",
                "LinkType": "Related",
                "LinkComment": "TF237027 migrated",
                "OldHistory": "did work",
                "OldTestSummary": {"steps": ["open", "click"]},
                "OldItemAreaPath": "ProjA\\Team1\\Sub"
            }]
        })
    );
}

#[test]
fn plan_roundtrips_and_matches_schema() {
    let plan = sample_plan();
    let text = serde_json::to_string_pretty(&plan).unwrap();
    let recovered: MigrationPlan = serde_json::from_str(&text).unwrap();
    assert_eq!(recovered, plan);

    let schema = serde_json::to_value(schema_for!(Vec<MigrationPlan>)).unwrap();
    let instance = serde_json::to_value(vec![plan]).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn record_ids_accept_numbers_on_read() {
    let record: ProvenanceRecord = serde_json::from_value(json!({
        "Name": "n",
        "NewID": 42,
        "OldID": " 7 ",
        "LinkType": "Related",
        "LinkComment": "TF237027",
        "OldHistory": "",
        "OldTestSummary": null,
        "OldItemAreaPath": "ProjA"
    }))
    .unwrap();

    assert_eq!(record.new_id, 42);
    assert_eq!(record.old_id, 7);
    assert_eq!(record.old_description, Description::Empty);
}

#[test]
fn record_rejects_non_numeric_id() {
    let parsed = serde_json::from_value::<ProvenanceRecord>(json!({
        "Name": "n",
        "NewID": "forty-two",
        "OldID": "7",
        "LinkType": "Related",
        "LinkComment": "TF237027",
        "OldHistory": "",
        "OldTestSummary": null,
        "OldItemAreaPath": "ProjA"
    }));
    assert!(parsed.is_err());
}

#[test]
fn record_rejects_zero_id() {
    for new_id in [json!("0"), json!(0)] {
        let parsed = serde_json::from_value::<ProvenanceRecord>(json!({
            "Name": "n",
            "NewID": new_id,
            "OldID": "7",
            "LinkType": "Related",
            "LinkComment": "TF237027",
            "OldHistory": "",
            "OldTestSummary": null,
            "OldItemAreaPath": "ProjA"
        }));
        assert!(parsed.is_err());
    }
}
