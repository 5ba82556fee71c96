//! Link scanner: turns marker-tagged related links into provenance records.

use align_core::entities::{Link, ProvenanceRecord, WorkItem};

use crate::collection::WorkItemStore;
use crate::error::ScanError;

/// Records and per-link failures from scanning one item.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<ProvenanceRecord>,
    pub errors: Vec<ScanError>,
}

/// Scan one new item's links.
///
/// Every related link whose comment starts with `marker` yields a record,
/// resolved against `store` for the old item's history, description, and
/// area path. Other link kinds are never considered. Multiple qualifying
/// links yield multiple records, in link order.
pub fn scan_item<S: WorkItemStore + ?Sized>(
    store: &S,
    item: &WorkItem,
    marker: &str,
) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for link in &item.links {
        let Link::Related {
            target_id,
            link_type_end,
            comment,
        } = link
        else {
            continue;
        };

        if !comment.starts_with(marker) {
            continue;
        }

        match store.get_item(*target_id) {
            Ok(old) => {
                tracing::debug!(new_id = item.id, old_id = target_id, "provenance link found");
                outcome.records.push(ProvenanceRecord {
                    name: item.title().to_string(),
                    new_id: item.id,
                    old_id: *target_id,
                    link_type: link_type_end.clone(),
                    link_comment: comment.clone(),
                    old_history: old.history().to_string(),
                    old_description: old.description(),
                    old_area_path: old.area_path().to_string(),
                });
            }
            Err(source) => {
                let error = ScanError {
                    new_id: item.id,
                    old_id: *target_id,
                    source,
                };
                tracing::warn!(%error, "skipping provenance link");
                outcome.errors.push(error);
            }
        }
    }

    if outcome.records.len() > 1 {
        tracing::warn!(
            new_id = item.id,
            count = outcome.records.len(),
            "item carries several provenance links; each will be applied in order"
        );
    }

    outcome
}
