//! Audit export: the nested JSON document and the flat CSV table.
//!
//! Both are produced in one pass over the plans so that plan order and
//! per-plan record order agree between the two files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use align_core::entities::MigrationPlan;
use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

use crate::error::ExportError;

/// Fixed CSV header.
pub const CSV_HEADER: [&str; 4] = ["Test Plan Name", "Old ID", "New ID", "Old Area Path"];

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub plans: usize,
    pub rows: usize,
}

/// Write `plans` as an indented JSON array to `json` and as CSV rows to `csv`.
/// Returns the number of data rows written.
///
/// # Errors
///
/// `ExportError` on the first serialization or write failure.
pub fn write_audit<J: Write, C: Write>(
    plans: &[MigrationPlan],
    json: J,
    csv: C,
) -> Result<usize, ExportError> {
    let mut table = csv::Writer::from_writer(csv);
    table.write_record(CSV_HEADER)?;

    let mut serializer = serde_json::Serializer::pretty(json);
    let mut seq = serializer.serialize_seq(Some(plans.len()))?;
    let mut rows = 0;

    for plan in plans {
        seq.serialize_element(plan)?;
        for record in &plan.records {
            let old_id = record.old_id.to_string();
            let new_id = record.new_id.to_string();
            table.write_record([
                plan.name.as_str(),
                old_id.as_str(),
                new_id.as_str(),
                record.old_area_path.as_str(),
            ])?;
            rows += 1;
        }
    }

    seq.end()?;
    let mut json = serializer.into_inner();
    json.flush()?;
    table.flush()?;
    Ok(rows)
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Create (or truncate) both audit files and write them.
///
/// # Errors
///
/// `ExportError::Io` if either file cannot be opened, otherwise as
/// [`write_audit`].
pub fn export_files(
    plans: &[MigrationPlan],
    json_path: &Path,
    csv_path: &Path,
) -> Result<ExportSummary, ExportError> {
    tracing::info!(
        json = %json_path.display(),
        csv = %csv_path.display(),
        "writing plans and cases"
    );

    let csv_file = create(csv_path)?;
    let json_file = create(json_path)?;
    let rows = write_audit(plans, json_file, csv_file)?;

    Ok(ExportSummary {
        json_path: json_path.to_path_buf(),
        csv_path: csv_path.to_path_buf(),
        plans: plans.len(),
        rows,
    })
}
