//! # prtitle-cli
//!
//! Pull-request title validator for GitHub Actions.
//!
//! - `pr-title-check` / `pr-title-check run` — validate the PR that triggered
//!   the workflow, publish step outputs, fail the step when required
//! - `pr-title-check check <TITLE>` — validate a title locally, print JSON
//!
//! Workflow commands go to stdout; diagnostics (`tracing`) go to stderr.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Crates whose diagnostics are shown by default.
const LOG_TARGETS: [&str; 4] = [
    "prtitle_cli",
    "prtitle_validator",
    "prtitle_actions",
    "prtitle_commit",
];

/// Validate pull-request titles against Conventional Commits.
#[derive(Parser)]
#[command(
    name = "pr-title-check",
    version,
    about,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Arguments for the default `run` command.
    #[command(flatten)]
    run: commands::run::RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the triggering pull request (GitHub Actions mode).
    Run(commands::run::RunArgs),
    /// Validate a title locally and print the outcome as JSON.
    Check(commands::check::CheckArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run(cli.run)) {
        Commands::Run(args) => commands::run::execute(&args),
        Commands::Check(args) => commands::check::execute(&args),
    }
}

/// Logs go to stderr so they don't interleave with workflow commands on stdout.
///
/// Workspace crates log at `warn` unless the runner has step debugging
/// enabled (`RUNNER_DEBUG=1`), in which case they log at `debug`.
fn init_tracing() -> anyhow::Result<()> {
    let level = if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
        "debug"
    } else {
        "warn"
    };

    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        filter = filter.add_directive(format!("{}={}", target, level).parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}
