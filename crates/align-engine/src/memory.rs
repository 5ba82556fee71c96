//! In-memory collection for tests and dry runs.
//!
//! Behaves like a real store for revisions, not-found lookups, and suites
//! that list missing test cases (skipped with a warning). It can be
//! told to reject specific writes: locked fields on an item, or area paths
//! that do not exist in the destination project.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

use align_core::StoreError;
use align_core::entities::{PlanRef, SuiteNode, WorkItem};
use align_core::fields::{AREA_PATH, PlanId, WorkItemId};

use crate::collection::{PlanSource, WorkItemStore};

#[derive(Debug, Clone)]
struct PlanEntry {
    project: String,
    plan: PlanRef,
    root_suite: SuiteNode,
}

#[derive(Debug, Default)]
pub struct MemoryCollection {
    items: BTreeMap<WorkItemId, WorkItem>,
    plans: Vec<PlanEntry>,
    locked: BTreeSet<(WorkItemId, String)>,
    rejected_areas: BTreeSet<String>,
    reads: Cell<usize>,
    saves: Vec<WorkItemId>,
    refreshed: Vec<PlanId>,
}

impl MemoryCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, item: WorkItem) -> Self {
        self.items.insert(item.id, item);
        self
    }

    /// Add a plan whose root suite holds `test_cases` directly.
    #[must_use]
    pub fn with_plan(self, project: &str, id: PlanId, name: &str, test_cases: &[WorkItemId]) -> Self {
        self.with_suite(
            project,
            PlanRef {
                id,
                name: name.to_string(),
            },
            SuiteNode {
                id,
                name: name.to_string(),
                test_cases: test_cases.to_vec(),
                suites: Vec::new(),
            },
        )
    }

    #[must_use]
    pub fn with_suite(mut self, project: &str, plan: PlanRef, root_suite: SuiteNode) -> Self {
        self.plans.push(PlanEntry {
            project: project.to_string(),
            plan,
            root_suite,
        });
        self
    }

    /// Reject any save that changes `field` on item `id`.
    #[must_use]
    pub fn lock_field(mut self, id: WorkItemId, field: &str) -> Self {
        self.locked.insert((id, field.to_string()));
        self
    }

    /// Reject any save that sets the area path to `path`.
    #[must_use]
    pub fn reject_area(mut self, path: &str) -> Self {
        self.rejected_areas.insert(path.to_string());
        self
    }

    /// Number of `get_item` calls so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Ids of successful saves, in order.
    #[must_use]
    pub fn saves(&self) -> &[WorkItemId] {
        &self.saves
    }

    /// Plans refreshed so far, in order.
    #[must_use]
    pub fn refreshed(&self) -> &[PlanId] {
        &self.refreshed
    }

    fn entry(&self, plan: PlanId) -> Result<&PlanEntry, StoreError> {
        self.plans
            .iter()
            .find(|entry| entry.plan.id == plan)
            .ok_or(StoreError::PlanNotFound(plan))
    }

    fn validate(&self, stored: &WorkItem, item: &WorkItem) -> Result<(), StoreError> {
        if stored.rev != item.rev {
            return Err(StoreError::Conflict {
                id: item.id,
                expected: item.rev,
                actual: stored.rev,
            });
        }

        for (id, field) in &self.locked {
            if *id == item.id && stored.field(field) != item.field(field) {
                return Err(StoreError::Rejected {
                    id: item.id,
                    reason: format!("field {field} is read-only"),
                });
            }
        }

        if stored.field(AREA_PATH) != item.field(AREA_PATH)
            && self.rejected_areas.contains(item.area_path())
        {
            return Err(StoreError::Rejected {
                id: item.id,
                reason: format!("area path '{}' does not exist", item.area_path()),
            });
        }

        Ok(())
    }
}

impl WorkItemStore for MemoryCollection {
    fn get_item(&self, id: WorkItemId) -> Result<WorkItem, StoreError> {
        self.reads.set(self.reads.get() + 1);
        self.items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn save_item(&mut self, item: &mut WorkItem) -> Result<(), StoreError> {
        let stored = self.items.get(&item.id).ok_or(StoreError::NotFound(item.id))?;
        self.validate(stored, item)?;

        item.rev += 1;
        self.items.insert(item.id, item.clone());
        self.saves.push(item.id);
        Ok(())
    }
}

impl PlanSource for MemoryCollection {
    fn plans(&self, project: &str) -> Result<Vec<PlanRef>, StoreError> {
        Ok(self
            .plans
            .iter()
            .filter(|entry| entry.project == project)
            .map(|entry| entry.plan.clone())
            .collect())
    }

    fn refresh_plan(&mut self, plan: PlanId) -> Result<(), StoreError> {
        self.entry(plan)?;
        self.refreshed.push(plan);
        Ok(())
    }

    fn test_cases(&self, plan: PlanId) -> Result<Vec<WorkItem>, StoreError> {
        let ids = self.entry(plan)?.root_suite.all_test_cases();
        Ok(ids
            .into_iter()
            .filter_map(|id| match self.get_item(id) {
                Ok(item) => Some(item),
                Err(error) => {
                    tracing::warn!(plan, id, %error, "suite references a missing test case");
                    None
                }
            })
            .collect())
    }
}
