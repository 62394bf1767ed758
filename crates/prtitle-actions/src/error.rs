// error.rs — Error types for the host runtime.
//
// Anything in here is fatal for a run: the validator turns these into a
// hard failure carrying the error's own message.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to the Actions runner.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A required input was empty or missing.
    #[error("Input required and not supplied: {0}")]
    InputRequired(String),

    /// A boolean input held something other than a YAML 1.2 core boolean.
    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBooleanInput { name: String },

    /// The webhook payload file could not be read.
    #[error("failed to read event payload at {path}: {source}")]
    PayloadRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The webhook payload file is not the expected JSON.
    #[error("malformed event payload at {path}: {source}")]
    PayloadParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Appending to the `GITHUB_OUTPUT` file failed.
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output name or value contains the generated heredoc delimiter.
    #[error("Unexpected input: {field} should not contain the delimiter \"{delimiter}\"")]
    DelimiterCollision {
        field: &'static str,
        delimiter: String,
    },

    /// Writing a workflow command to the log stream failed.
    #[error("failed to write workflow command: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;
