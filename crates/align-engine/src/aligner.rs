//! Run driver: enumerate plans, scan their test cases, then write the old
//! items' fields and area paths onto the copies.
//!
//! Everything runs sequentially: one plan, one item, one link at a time.
//! Per-link and per-item failures are recorded and skipped; only failing to
//! enumerate the project's plans stops a run.

use align_core::StoreError;
use align_core::entities::{MigrationPlan, PlanRef, ProvenanceRecord};

use crate::collection::{AlignContext, Collection};
use crate::error::{AreaError, RestoreError};
use crate::progress::{Phase, ProgressSink};
use crate::report::{AlignmentReport, PlanErrors, PlanOutcome};
use crate::restorer::{apply_area_path, restore_fields};
use crate::scanner::scan_item;

#[derive(Debug, Default, Clone, Copy)]
struct RecordResult {
    restored: bool,
    area_updated: bool,
}

pub struct Aligner<'a, C: Collection> {
    ctx: AlignContext<'a, C>,
}

impl<'a, C: Collection> Aligner<'a, C> {
    #[must_use]
    pub const fn new(ctx: AlignContext<'a, C>) -> Self {
        Self { ctx }
    }

    /// Enumerate the project's plans and scan every plan `should_process`
    /// accepts. Plans come back in enumeration order; a plan whose test cases
    /// cannot be read is logged and left out.
    ///
    /// # Errors
    ///
    /// `StoreError` if the project's plans cannot be enumerated.
    pub fn collect<F, P>(
        &mut self,
        mut should_process: F,
        progress: &mut P,
    ) -> Result<Vec<MigrationPlan>, StoreError>
    where
        F: FnMut(&PlanRef) -> bool,
        P: ProgressSink + ?Sized,
    {
        let plans = self.ctx.collection.plans(&self.ctx.project)?;
        tracing::info!(
            project = %self.ctx.project,
            plans = plans.len(),
            "executing alignment tasks"
        );

        let mut collected = Vec::new();
        for plan in &plans {
            if !should_process(plan) {
                tracing::debug!(plan = %plan.name, id = plan.id, "plan skipped by operator");
                continue;
            }

            match self.scan_plan(plan, progress) {
                Ok(migration) => collected.push(migration),
                Err(error) => {
                    tracing::warn!(plan = %plan.name, id = plan.id, %error, "cannot read test plan; skipping");
                }
            }
        }
        Ok(collected)
    }

    /// Refresh one plan, then scan every test case in it.
    ///
    /// # Errors
    ///
    /// `StoreError` if the plan cannot be refreshed or enumerated.
    pub fn scan_plan<P>(&mut self, plan: &PlanRef, progress: &mut P) -> Result<MigrationPlan, StoreError>
    where
        P: ProgressSink + ?Sized,
    {
        self.ctx.collection.refresh_plan(plan.id)?;

        let label = format!("{} ({})", plan.name, plan.id);
        tracing::info!(plan = %label, "getting all test cases");
        progress.start(Phase::Enumerate, &label, 0);
        let test_cases = self.ctx.collection.test_cases(plan.id);
        progress.finish();
        let test_cases = test_cases?;

        let mut migration = MigrationPlan::new(plan);
        if test_cases.is_empty() {
            return Ok(migration);
        }

        tracing::info!(plan = %label, cases = test_cases.len(), "processing all links");
        progress.start(Phase::Scan, &label, test_cases.len());
        let mut scan_errors = 0usize;
        for case in &test_cases {
            let outcome = scan_item(&*self.ctx.collection, case, &self.ctx.scan.marker);
            scan_errors += outcome.errors.len();
            migration.extend(outcome.records);
            progress.advance();
        }
        progress.finish();

        tracing::info!(
            plan = %label,
            records = migration.len(),
            scan_errors,
            "links processed"
        );
        Ok(migration)
    }

    /// Restore fields and area paths for every record of every plan.
    pub fn align<P>(&mut self, plans: &[MigrationPlan], progress: &mut P) -> AlignmentReport
    where
        P: ProgressSink + ?Sized,
    {
        tracing::info!("performing alignment for saved test cases");
        let mut report = AlignmentReport::default();
        let mut errors = PlanErrors::new();

        for plan in plans {
            let mut outcome = PlanOutcome {
                plan_id: plan.id,
                plan_name: plan.name.clone(),
                records: plan.len(),
                restored: 0,
                areas_updated: 0,
                failures: Vec::new(),
                bad_areas: Vec::new(),
            };

            if !plan.is_empty() {
                let label = format!("{} ({})", plan.name, plan.id);
                tracing::info!(plan = %label, "writing information to copied test cases");
                progress.start(Phase::Write, &label, plan.len());
                for record in &plan.records {
                    let result = self.align_record(record, &mut errors);
                    outcome.restored += usize::from(result.restored);
                    outcome.areas_updated += usize::from(result.area_updated);
                    progress.advance();
                }
                progress.finish();
            }

            let drained = errors.emit(&plan.name);
            outcome.failures = drained.failures;
            outcome.bad_areas = drained.bad_areas;
            report.plans.push(outcome);
        }

        report
    }

    fn align_record(&mut self, record: &ProvenanceRecord, errors: &mut PlanErrors) -> RecordResult {
        let mut result = RecordResult::default();
        let delimiter = self.ctx.scan.area_delimiter;
        let store = &mut *self.ctx.collection;

        let mut item = match store.get_item(record.new_id) {
            Ok(item) => item,
            Err(source) => {
                errors.record_restore(&RestoreError::new(record.new_id, &source));
                errors.record_area(&AreaError {
                    id: record.new_id,
                    title: record.name.clone(),
                    attempted: None,
                    message: source.to_string(),
                });
                return result;
            }
        };

        match restore_fields(store, record, &mut item) {
            Ok(()) => result.restored = true,
            Err(error) => {
                tracing::debug!(%error, "restore failed; re-reading item for area step");
                errors.record_restore(&error);
                item = match store.get_item(record.new_id) {
                    Ok(fresh) => fresh,
                    Err(source) => {
                        errors.record_area(&AreaError {
                            id: record.new_id,
                            title: record.name.clone(),
                            attempted: None,
                            message: source.to_string(),
                        });
                        return result;
                    }
                };
            }
        }

        match apply_area_path(store, record, &mut item, delimiter) {
            Ok(_) => result.area_updated = true,
            Err(error) => errors.record_area(&error),
        }

        result
    }
}
