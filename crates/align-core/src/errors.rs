//! Cross-cutting error types.
//!
//! Store errors can originate from any collection implementation. Per-phase
//! errors (scan, restore, area, export) live in `align-engine` where those
//! phases run; the binary converges everything into `anyhow`.

use thiserror::Error;

use crate::fields::{PlanId, WorkItemId};

/// Errors raised by a work item store or plan source.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No work item exists with the given id.
    #[error("Work item not found: {0}")]
    NotFound(WorkItemId),

    /// No test plan exists with the given id.
    #[error("Test plan not found: {0}")]
    PlanNotFound(PlanId),

    /// No project with the given name exists in the collection.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// The store refused the write (validation failure, invalid value).
    #[error("Save rejected for work item {id}: {reason}")]
    Rejected { id: WorkItemId, reason: String },

    /// The item changed in the store since it was read.
    #[error("Revision conflict on work item {id}: expected rev {expected}, store has rev {actual}")]
    Conflict {
        id: WorkItemId,
        expected: u32,
        actual: u32,
    },

    /// Reading or writing the backing file failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document could not be parsed or serialized.
    #[error("Store snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
