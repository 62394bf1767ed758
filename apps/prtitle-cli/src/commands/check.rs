// check.rs — Local mode: validate a title given on the command line.

use std::process::ExitCode;

use clap::Args;
use prtitle_commit::GitConventionalParser;
use prtitle_validator::TitleValidator;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Title to validate.
    title: String,

    /// Exit with status 1 when the title is not valid.
    #[arg(long)]
    fail_when_invalid: bool,
}

pub fn execute(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let validator = TitleValidator::new(GitConventionalParser::new());
    let outcome = validator.evaluate(&args.title);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if args.fail_when_invalid && !outcome.is_valid() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
