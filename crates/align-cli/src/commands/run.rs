use align_core::entities::{MigrationPlan, PlanRef};
use align_engine::{
    AlignContext, Aligner, AlignmentReport, PlanOutcome, SnapshotCollection, export_files,
};
use anyhow::Context;

use crate::bootstrap::Settings;
use crate::cli::{GlobalFlags, RunArgs};
use crate::output::{RunSummary, render_run};
use crate::progress::BarProgress;
use crate::prompt;

/// Handle `tcalign run`.
pub fn handle(args: &RunArgs, settings: &Settings, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut collection = SnapshotCollection::open(&settings.snapshot)
        .with_context(|| format!("failed to open collection snapshot {}", settings.snapshot))?;

    tracing::info!(
        collection = collection.name(),
        url = %settings.collection_url,
        project = %settings.destination_project,
        "connected to collection"
    );

    let ctx = AlignContext::new(
        &mut collection,
        settings.destination_project.clone(),
        settings.scan(),
    );
    let mut aligner = Aligner::new(ctx);
    let mut progress = BarProgress::new();

    let plans = aligner
        .collect(|plan| should_process(args, plan), &mut progress)
        .with_context(|| format!("failed to list test plans of {}", settings.destination_project))?;

    let mut dry_run = args.dry_run;
    if !dry_run && args.is_interactive() && plans.iter().any(|plan| !plan.is_empty()) {
        let records: usize = plans.iter().map(MigrationPlan::len).sum();
        let question = format!(
            "Write history, description, and area paths to {records} test cases in {}? Enter y/n:",
            settings.destination_project
        );
        dry_run = !prompt::ask(&question).context("failed to read confirmation")?;
    }

    let report = if dry_run {
        tracing::info!("dry run: skipping writes");
        scanned_only(&plans)
    } else {
        aligner.align(&plans, &mut progress)
    };

    let export = export_files(&plans, &settings.json_path, &settings.csv_path)
        .context("failed to write audit files")?;

    let summary = RunSummary {
        project: settings.destination_project.clone(),
        dry_run,
        report,
        export,
        log_path: settings.log_path.display().to_string(),
    };
    println!("{}", render_run(&summary, flags.format)?);

    if !flags.quiet {
        eprintln!(
            "Alignment completed. Check log file in: {} for missing areas or other errors.",
            settings.log_path.display()
        );
    }
    Ok(())
}

fn should_process(args: &RunArgs, plan: &PlanRef) -> bool {
    if !args.plans.is_empty() {
        return args.plans.contains(&plan.id);
    }
    if args.yes {
        return true;
    }

    let question = format!(
        "Collect links and perform alignment for Test Plan \"{} ({})\"? Enter y/n:",
        plan.name, plan.id
    );
    prompt::ask(&question).unwrap_or_else(|error| {
        tracing::warn!(plan = %plan.name, %error, "cannot read answer; skipping plan");
        false
    })
}

/// Report for a run that scanned but wrote nothing.
fn scanned_only(plans: &[MigrationPlan]) -> AlignmentReport {
    AlignmentReport {
        plans: plans
            .iter()
            .map(|plan| PlanOutcome {
                plan_id: plan.id,
                plan_name: plan.name.clone(),
                records: plan.len(),
                restored: 0,
                areas_updated: 0,
                failures: Vec::new(),
                bad_areas: Vec::new(),
            })
            .collect(),
    }
}
