//! Error types for the alignment phases.
//!
//! Scan, restore, and area errors are per-link or per-item: callers record
//! them and keep going. Export errors are fatal to the run.

use std::path::PathBuf;

use align_core::StoreError;
use align_core::fields::WorkItemId;
use thiserror::Error;

/// Resolving a provenance link's target failed. Only that link is dropped.
#[derive(Debug, Error)]
#[error("Cannot resolve linked item {old_id} from item {new_id}: {source}")]
pub struct ScanError {
    pub new_id: WorkItemId,
    pub old_id: WorkItemId,
    #[source]
    pub source: StoreError,
}

/// Copying history / description onto the new item failed.
#[derive(Debug, Error)]
#[error("Test ID: {id} \tException: {message}")]
pub struct RestoreError {
    pub id: WorkItemId,
    pub message: String,
}

impl RestoreError {
    #[must_use]
    pub fn new(id: WorkItemId, source: &StoreError) -> Self {
        Self {
            id,
            message: source.to_string(),
        }
    }
}

/// Writing the reconciled area path failed.
#[derive(Debug, Error)]
#[error("Test Case: {id} - {title} \tException: {message}")]
pub struct AreaError {
    pub id: WorkItemId,
    pub title: String,
    /// The path that was attempted, if any was computed.
    pub attempted: Option<String>,
    pub message: String,
}

/// Writing the audit files failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot write audit file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Flushing audit output failed: {0}")]
    Write(#[from] std::io::Error),

    #[error("Audit JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Audit CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}
