//! Field restoration and area path assignment for one new item.

use align_core::entities::{ProvenanceRecord, WorkItem};

use crate::collection::WorkItemStore;
use crate::error::{AreaError, RestoreError};
use crate::reconcile::{Reconciled, reconcile_with};

/// Copy the old item's history and description onto `item` and persist.
///
/// On failure `item` keeps the unsaved edits; callers that go on to write
/// other fields should re-fetch it first.
///
/// # Errors
///
/// `RestoreError` carrying the item id and the store's message.
pub fn restore_fields<S: WorkItemStore + ?Sized>(
    store: &mut S,
    record: &ProvenanceRecord,
    item: &mut WorkItem,
) -> Result<(), RestoreError> {
    item.set_history(record.old_history.as_str());
    item.set_description(&record.old_description);
    store
        .save_item(item)
        .map_err(|source| RestoreError::new(item.id, &source))
}

/// Reconcile the old item's area path onto `item` and persist.
///
/// # Errors
///
/// `AreaError` carrying the attempted path when the store rejects it.
pub fn apply_area_path<S: WorkItemStore + ?Sized>(
    store: &mut S,
    record: &ProvenanceRecord,
    item: &mut WorkItem,
    delimiter: char,
) -> Result<Reconciled, AreaError> {
    let reconciled = reconcile_with(&record.old_area_path, item.area_path(), delimiter);
    tracing::debug!(
        id = item.id,
        from = item.area_path(),
        to = %reconciled.path,
        merge = %reconciled.merge,
        "reconciled area path"
    );

    item.set_area_path(reconciled.path.as_str());
    match store.save_item(item) {
        Ok(()) => Ok(reconciled),
        Err(source) => Err(AreaError {
            id: item.id,
            title: item.title().to_string(),
            attempted: Some(reconciled.path),
            message: source.to_string(),
        }),
    }
}
