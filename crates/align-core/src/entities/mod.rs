//! Entity structs for work items, plans, and provenance records.
//!
//! `WorkItem` and `Link` describe what the store hands back; `MigrationPlan`
//! and `ProvenanceRecord` are the audit document written at the end of a run.

mod link;
mod plan;
mod provenance;
mod work_item;

pub use link::Link;
pub use plan::{MigrationPlan, PlanRef, SuiteNode};
pub use provenance::ProvenanceRecord;
pub use work_item::WorkItem;
