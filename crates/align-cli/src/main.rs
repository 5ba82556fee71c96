use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;
mod prompt;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("tcalign error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Schema => {
            init_tracing(&flags, None)?;
            commands::schema::handle()
        }
        cli::Commands::Vars(args) => {
            init_tracing(&flags, None)?;
            let config = bootstrap::load_config()?;
            commands::vars::handle(args, &config, &flags)
        }
        cli::Commands::Run(args) => {
            let config = bootstrap::load_config()?;
            let settings =
                bootstrap::Settings::resolve(&config, &args.overrides, config.output.paths_now());
            settings.require_collection()?;

            for path in [&settings.json_path, &settings.csv_path, &settings.log_path] {
                ensure_parent(path)?;
            }
            let log_file = File::create(&settings.log_path).with_context(|| {
                format!("failed to create log file {}", settings.log_path.display())
            })?;
            init_tracing(&flags, Some(log_file))?;

            commands::run::handle(args, &settings, &flags)
        }
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// Console output filtered by `ALIGN_LOG` or the quiet / verbose flags; the
/// run log file, when given, records info (debug with `--verbose`) without
/// color.
fn init_tracing(flags: &cli::GlobalFlags, log_file: Option<File>) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("ALIGN_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let file = log_file.map(|file| {
        let level = if flags.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_thread_ids(true)
            .with_filter(level)
    });

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
