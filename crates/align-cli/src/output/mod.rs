use align_engine::{AlignmentReport, ExportSummary};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::TableOptions;

/// Final result of `tcalign run`.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub project: String,
    pub dry_run: bool,
    pub report: AlignmentReport,
    pub export: ExportSummary,
    pub log_path: String,
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a run summary: JSON as-is, or a per-plan table plus file locations.
pub fn render_run(summary: &RunSummary, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }

    let headers = ["plan", "id", "records", "restored", "areas", "failures", "bad_areas"];
    let rows = summary
        .report
        .plans
        .iter()
        .map(|plan| {
            vec![
                plan.plan_name.clone(),
                plan.plan_id.to_string(),
                plan.records.to_string(),
                plan.restored.to_string(),
                plan.areas_updated.to_string(),
                plan.failures.len().to_string(),
                plan.bad_areas.len().to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let mut out = if rows.is_empty() {
        String::from("(no plans processed)")
    } else {
        table::render_table(&headers, &rows, &["failures", "bad_areas"], table_options())
    };
    if summary.dry_run {
        out.push_str("\n\ndry run: no work items were modified");
    }
    out.push_str(&format!(
        "\n\njson: {}\ncsv:  {} ({} rows)",
        summary.export.json_path.display(),
        summary.export.csv_path.display(),
        summary.export.rows
    ));
    Ok(out)
}

/// Render any serializable object as JSON or as a key / value table.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let Value::Object(map) = serde_json::to_value(value)? else {
                return Ok(serde_json::to_string_pretty(value)?);
            };
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, &[], table_options()))
        }
    }
}

/// Print `value` to stdout in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use align_engine::PlanOutcome;
    use serde::Serialize;

    use super::*;
    use crate::output::table::render_table;

    #[derive(Serialize)]
    struct Example {
        project: &'static str,
        plans: u32,
    }

    fn summary() -> RunSummary {
        RunSummary {
            project: "ProjB".into(),
            dry_run: false,
            report: AlignmentReport {
                plans: vec![PlanOutcome {
                    plan_id: 12,
                    plan_name: "PlanX".into(),
                    records: 3,
                    restored: 3,
                    areas_updated: 2,
                    failures: vec!["Test Case: 42 - x \tException: rejected".into()],
                    bad_areas: vec![r"ProjB\Gone".into()],
                }],
            },
            export: ExportSummary {
                json_path: PathBuf::from("a.json"),
                csv_path: PathBuf::from("a.csv"),
                plans: 1,
                rows: 3,
            },
            log_path: "run.log".into(),
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { project: "x", plans: 7 }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["project"], "x");
        assert_eq!(parsed["plans"], 7);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&Example { project: "x", plans: 7 }, OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("project"));
    }

    #[test]
    fn run_table_lists_plans_and_files() {
        let out = render_run(&summary(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("plan"));
        assert!(lines[2].starts_with("PlanX"));
        assert!(out.contains("a.csv (3 rows)"));
        assert!(!out.contains("dry run"));
    }

    #[test]
    fn run_json_includes_failures() {
        let out = render_run(&summary(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["report"]["plans"][0]["bad_areas"][0], r"ProjB\Gone");
    }

    #[test]
    fn numbers_right_align_and_long_cells_truncate() {
        let rows = vec![
            vec!["a much longer plan name".to_string(), "5".to_string()],
            vec!["b".to_string(), "120".to_string()],
        ];
        let out = render_table(
            &["plan", "records"],
            &rows,
            &[],
            TableOptions {
                max_width: Some(16),
                color: false,
            },
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains('…'));
        assert!(lines[3].ends_with("    120"));
    }
}
