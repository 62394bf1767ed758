// run.rs — Actions mode: validate the pull request that triggered the workflow.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use prtitle_actions::context::{EVENT_NAME_VAR, EVENT_PATH_VAR};
use prtitle_actions::workflow::OUTPUT_FILE_VAR;
use prtitle_actions::{ActionInputs, InvocationContext, Reporter, WorkflowReporter};
use prtitle_commit::GitConventionalParser;
use prtitle_validator::TitleValidator;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Name of the triggering event.
    #[arg(long, env = EVENT_NAME_VAR, default_value = "")]
    pub(crate) event_name: String,

    /// Path to the webhook payload JSON.
    #[arg(long, env = EVENT_PATH_VAR)]
    event_path: Option<PathBuf>,

    /// File receiving step outputs (legacy `::set-output` when unset).
    #[arg(long, env = OUTPUT_FILE_VAR)]
    output_file: Option<PathBuf>,
}

pub fn execute(args: &RunArgs) -> anyhow::Result<ExitCode> {
    let output_file = args
        .output_file
        .clone()
        .filter(|path| !path.as_os_str().is_empty());
    let mut reporter = WorkflowReporter::new(io::stdout(), output_file);

    let ctx = match InvocationContext::load(args.event_name.as_str(), args.event_path.as_deref()) {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::error!("failed to load invocation context: {}", err);
            reporter.set_failed(&err.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };
    let inputs = ActionInputs::from_env();

    let validator = TitleValidator::new(GitConventionalParser::new());
    let state = validator.run(&ctx, &inputs, &mut reporter)?;
    tracing::debug!(?state, "run complete");

    Ok(if reporter.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
