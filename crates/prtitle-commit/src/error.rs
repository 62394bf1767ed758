// error.rs — Error types for the commit parsing capability.

use thiserror::Error;

/// Errors produced while parsing a commit message.
///
/// A grammar failure is the only recoverable condition in a validation run:
/// the caller reports it and decides whether to escalate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The text does not conform to the Conventional Commits grammar.
    #[error("{0}")]
    Grammar(String),
}

pub type Result<T> = std::result::Result<T, CommitError>;
