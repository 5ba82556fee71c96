//! File-backed collection behaviour and a full run over a snapshot on disk.

use std::path::Path;

use align_config::ScanConfig;
use align_core::StoreError;
use align_engine::{
    AlignContext, Aligner, NoProgress, PlanSource, SnapshotCollection, WorkItemStore,
    export_files,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn write_snapshot(path: &Path) {
    let document = json!({
        "collection": "DefaultCollection",
        "projects": [
            {
                "name": "ProjA",
                "plans": []
            },
            {
                "name": "ProjB",
                "areas": ["ProjB\\Team1", "ProjB\\Team1\\Sub"],
                "plans": [
                    {
                        "id": 1,
                        "name": "PlanX",
                        "root_suite": {
                            "id": 100,
                            "name": "PlanX",
                            "test_cases": [42],
                            "suites": [{"id": 101, "name": "child", "test_cases": [43, 404]}]
                        }
                    }
                ]
            }
        ],
        "items": [
            {
                "id": 7,
                "rev": 3,
                "fields": {
                    "System.Title": "Login works",
                    "System.History": "did work",
                    "System.Description": {"steps": ["open", "login"]},
                    "System.AreaPath": "ProjA\\Team1\\Sub"
                }
            },
            {
                "id": 8,
                "fields": {"System.AreaPath": "ProjA\\Retired"}
            },
            {
                "id": 42,
                "fields": {"System.Title": "Login works", "System.AreaPath": "ProjB"},
                "links": [
                    {"kind": "related", "target_id": 7, "link_type_end": "Related", "comment": "TF237027 migrated"},
                    {"kind": "hyperlink", "location": "https://example.test", "comment": "TF237027"}
                ]
            },
            {
                "id": 43,
                "fields": {"System.Title": "Logout works", "System.AreaPath": "ProjB\\Other"},
                "links": [
                    {"kind": "related", "target_id": 8, "link_type_end": "Tested By", "comment": "TF237027"}
                ]
            }
        ]
    });
    std::fs::write(path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
}

#[test]
fn enumerates_plans_and_flattens_suites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_snapshot(&path);

    let mut collection = SnapshotCollection::open(&path).unwrap();
    assert_eq!(collection.name(), "DefaultCollection");

    let plans = collection.plans("ProjB").unwrap();
    assert_eq!(plans.len(), 1);
    collection.refresh_plan(plans[0].id).unwrap();

    let ids: Vec<u32> = collection
        .test_cases(1)
        .unwrap()
        .iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(ids, vec![42, 43]);
}

#[test]
fn unknown_project_and_plan_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_snapshot(&path);
    let mut collection = SnapshotCollection::open(&path).unwrap();

    assert!(matches!(
        collection.plans("Nope"),
        Err(StoreError::ProjectNotFound(name)) if name == "Nope"
    ));
    assert!(matches!(
        collection.refresh_plan(9),
        Err(StoreError::PlanNotFound(9))
    ));
    assert!(matches!(collection.get_item(1), Err(StoreError::NotFound(1))));
}

#[test]
fn save_writes_through_and_bumps_revision() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_snapshot(&path);

    let mut collection = SnapshotCollection::open(&path).unwrap();
    let mut item = collection.get_item(42).unwrap();
    item.set_history("restored");
    collection.save_item(&mut item).unwrap();
    assert_eq!(item.rev, 1);

    let reopened = SnapshotCollection::open(&path).unwrap();
    let stored = reopened.get_item(42).unwrap();
    assert_eq!(stored.history(), "restored");
    assert_eq!(stored.rev, 1);
}

#[test]
fn stale_revision_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_snapshot(&path);

    let mut collection = SnapshotCollection::open(&path).unwrap();
    let mut first = collection.get_item(42).unwrap();
    let mut stale = collection.get_item(42).unwrap();
    collection.save_item(&mut first).unwrap();

    assert!(matches!(
        collection.save_item(&mut stale),
        Err(StoreError::Conflict { id: 42, .. })
    ));
}

#[test]
fn unknown_area_path_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_snapshot(&path);

    let mut collection = SnapshotCollection::open(&path).unwrap();
    let mut item = collection.get_item(42).unwrap();
    item.set_area_path(r"ProjB\Nowhere");
    assert!(matches!(
        collection.save_item(&mut item),
        Err(StoreError::Rejected { id: 42, .. })
    ));

    let mut item = collection.get_item(42).unwrap();
    item.set_area_path(r"ProjB\Team1\Sub");
    collection.save_item(&mut item).unwrap();
}

#[test]
fn full_run_over_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collection.json");
    write_snapshot(&path);
    let json_path = dir.path().join("audit.json");
    let csv_path = dir.path().join("audit.csv");

    let mut collection = SnapshotCollection::open(&path).unwrap();
    let ctx = AlignContext::new(&mut collection, "ProjB", ScanConfig::default());
    let mut aligner = Aligner::new(ctx);
    let plans = aligner.collect(|_| true, &mut NoProgress).unwrap();
    let report = aligner.align(&plans, &mut NoProgress);
    let summary = export_files(&plans, &json_path, &csv_path).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(report.plans[0].restored, 2);
    assert_eq!(report.plans[0].areas_updated, 1);
    assert_eq!(report.plans[0].bad_areas, vec![r"ProjB\Retired".to_string()]);

    let reopened = SnapshotCollection::open(&path).unwrap();
    let restored = reopened.get_item(42).unwrap();
    assert_eq!(restored.area_path(), r"ProjB\Team1\Sub");
    assert_eq!(restored.history(), "did work");
    assert_eq!(
        restored.field("System.Description"),
        Some(&json!({"steps": ["open", "login"]}))
    );
    assert_eq!(reopened.get_item(43).unwrap().area_path(), r"ProjB\Other");

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "Test Plan Name,Old ID,New ID,Old Area Path\n\
         PlanX,7,42,ProjA\\Team1\\Sub\n\
         PlanX,8,43,ProjA\\Retired\n"
    );

    let audit: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(audit[0]["TestPlanName"], "PlanX");
    assert_eq!(audit[0]["TestCases"][1]["LinkType"], "Tested By");
    assert_eq!(audit[0]["TestCases"][0]["OldTestSummary"]["steps"][1], "login");
}
