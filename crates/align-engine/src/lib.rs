//! # align-engine
//!
//! Re-attaches history, description, and area classification to test cases
//! that were copied between projects, by following the related links the
//! copy tool left on each copy.
//!
//! Pipeline per selected plan:
//! 1. [`scanner`] turns marker-tagged related links into provenance records
//! 2. [`restorer`] copies history and description from the old item
//! 3. [`reconcile`] re-roots the old item's area path under the new project
//! 4. [`report`] aggregates per-item failures and logs them per plan
//!
//! Finally [`export`] writes the JSON and CSV audit files for the whole run.
//!
//! The store and plan hierarchy are reached only through the traits in
//! [`collection`]; [`snapshot`] and [`memory`] implement them.

pub mod aligner;
pub mod collection;
pub mod error;
pub mod export;
pub mod memory;
pub mod progress;
pub mod reconcile;
pub mod report;
pub mod restorer;
pub mod scanner;
pub mod snapshot;

pub use aligner::Aligner;
pub use collection::{AlignContext, Collection, PlanSource, WorkItemStore};
pub use error::{AreaError, ExportError, RestoreError, ScanError};
pub use export::{ExportSummary, export_files, write_audit};
pub use memory::MemoryCollection;
pub use progress::{NoProgress, Phase, ProgressSink};
pub use reconcile::reconcile;
pub use report::{AlignmentReport, PlanOutcome};
pub use snapshot::SnapshotCollection;
