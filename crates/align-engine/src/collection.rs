//! Collaborator interfaces: the work item store and the plan hierarchy.
//!
//! Every call is one round trip. Implementations must not batch or cache
//! writes; reads after `refresh_plan` must reflect the backing state.

use align_config::ScanConfig;
use align_core::StoreError;
use align_core::entities::{PlanRef, WorkItem};
use align_core::fields::{PlanId, WorkItemId};

/// Key/value access to work items by id.
pub trait WorkItemStore {
    /// Fetch the current state of a work item.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` for unknown ids, or a backend failure.
    fn get_item(&self, id: WorkItemId) -> Result<WorkItem, StoreError>;

    /// Persist the item's fields. On success the item's revision is updated
    /// to the stored one.
    ///
    /// # Errors
    ///
    /// `StoreError::Rejected` on validation failure, `StoreError::Conflict`
    /// when the item changed since it was read.
    fn save_item(&mut self, item: &mut WorkItem) -> Result<(), StoreError>;
}

/// Enumeration of test plans and their test cases.
pub trait PlanSource {
    /// Plans of a project, in the order the source returns them.
    ///
    /// # Errors
    ///
    /// Backend failure, or an unknown project.
    fn plans(&self, project: &str) -> Result<Vec<PlanRef>, StoreError>;

    /// Re-read a plan's suite hierarchy from the backing state.
    ///
    /// # Errors
    ///
    /// `StoreError::PlanNotFound` or a backend failure.
    fn refresh_plan(&mut self, plan: PlanId) -> Result<(), StoreError>;

    /// Every test case under the plan's root suite, with links.
    ///
    /// # Errors
    ///
    /// `StoreError::PlanNotFound` or a backend failure.
    fn test_cases(&self, plan: PlanId) -> Result<Vec<WorkItem>, StoreError>;
}

/// A collection that serves both work items and plans.
pub trait Collection: WorkItemStore + PlanSource {}

impl<T: WorkItemStore + PlanSource> Collection for T {}

/// Everything the alignment phases need, built once per run and passed down
/// by reference.
pub struct AlignContext<'a, C: Collection> {
    pub collection: &'a mut C,
    pub project: String,
    pub scan: ScanConfig,
}

impl<'a, C: Collection> AlignContext<'a, C> {
    pub fn new(collection: &'a mut C, project: impl Into<String>, scan: ScanConfig) -> Self {
        Self {
            collection,
            project: project.into(),
            scan,
        }
    }
}
