use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, OverrideArgs, RunArgs};

/// Top-level CLI parser for the `tcalign` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tcalign",
    version,
    about = "Restore history, description, and area paths on test cases copied between projects"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (console shows errors only; the log file is unaffected)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_collects_plan_filters() {
        let cli = Cli::try_parse_from(["tcalign", "run", "--plan", "3", "--plan", "7", "--dry-run"])
            .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.plans, vec![3, 7]);
        assert!(args.dry_run);
        assert!(!args.is_interactive());
    }

    #[test]
    fn bare_run_is_interactive() {
        let cli = Cli::try_parse_from(["tcalign", "run"]).expect("cli should parse");
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.is_interactive());
        assert!(args.overrides.json.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tcalign", "vars", "--format", "json", "--quiet"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Vars(_)));
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::try_parse_from([
            "tcalign",
            "run",
            "--yes",
            "--snapshot",
            "c.json",
            "--project-name",
            "ProjB",
            "--json",
            "a.json",
            "--csv",
            "a.csv",
            "--log",
            "a.txt",
        ])
        .expect("cli should parse");
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.overrides.project_name.as_deref(), Some("ProjB"));
        assert_eq!(args.overrides.log.as_deref(), Some("a.txt"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["tcalign", "--format", "xml", "schema"]).is_err());
    }
}
