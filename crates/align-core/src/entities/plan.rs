use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ProvenanceRecord;
use crate::fields::{PlanId, WorkItemId};

/// A test plan as enumerated from the destination project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanRef {
    pub id: PlanId,
    pub name: String,
}

/// A suite in a plan's suite hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuiteNode {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub test_cases: Vec<WorkItemId>,
    #[serde(default)]
    pub suites: Vec<SuiteNode>,
}

impl SuiteNode {
    /// Every test case id in this suite and its descendants, depth first,
    /// first occurrence wins.
    #[must_use]
    pub fn all_test_cases(&self) -> Vec<WorkItemId> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<WorkItemId>) {
        for id in &self.test_cases {
            if !out.contains(id) {
                out.push(*id);
            }
        }
        for suite in &self.suites {
            suite.collect_into(out);
        }
    }
}

/// One plan's worth of provenance records, in discovery order.
///
/// Serialized field names match the audit JSON consumers already read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MigrationPlan {
    #[serde(rename = "TestPlanName")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: PlanId,
    #[serde(rename = "TestCases", default)]
    pub records: Vec<ProvenanceRecord>,
}

impl MigrationPlan {
    #[must_use]
    pub fn new(plan: &PlanRef) -> Self {
        Self {
            name: plan.name.clone(),
            id: plan.id,
            records: Vec::new(),
        }
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ProvenanceRecord>) {
        self.records.extend(records);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
