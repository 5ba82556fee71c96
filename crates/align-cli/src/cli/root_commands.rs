use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Restore history, description, and area paths on copied test cases.
    Run(RunArgs),
    /// Show the effective settings a run would use.
    Vars(OverrideArgs),
    /// Print the JSON schema of the audit document.
    Schema,
}

/// One-run overrides for configured values. Never written back.
#[derive(Clone, Debug, Default, Args)]
pub struct OverrideArgs {
    /// Collection snapshot to read and update.
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Destination project holding the copied test cases.
    #[arg(long = "project-name")]
    pub project_name: Option<String>,

    /// Audit JSON path (file name and extension included).
    #[arg(long)]
    pub json: Option<String>,

    /// Audit CSV path (file name and extension included).
    #[arg(long)]
    pub csv: Option<String>,

    /// Log file path (file name and extension included).
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Process every plan without asking.
    #[arg(short, long)]
    pub yes: bool,

    /// Process only these plan ids (implies no per-plan prompt).
    #[arg(long = "plan", value_name = "ID")]
    pub plans: Vec<i64>,

    /// Scan and export the audit files without writing to any work item.
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Whether the operator is asked per plan and before the write phase.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.yes && self.plans.is_empty()
    }
}
