//! The parsing capability consumed by the validator.

use crate::ast::CommitAst;
use crate::error::Result;
use crate::normalize::{normalize, NormalizedCommit};

/// Pluggable Conventional Commits engine.
///
/// Any grammar implementation can sit behind this trait; the validator only
/// reacts to `parse` succeeding or failing.
pub trait ConventionalParser: Send + Sync {
    /// Parse a commit message (or a PR title) into a syntax tree.
    fn parse(&self, text: &str) -> Result<CommitAst>;

    /// Flatten a syntax tree into the changelog-style record.
    fn normalize(&self, ast: &CommitAst) -> NormalizedCommit {
        normalize(ast)
    }

    /// Engine display name (for logging).
    fn name(&self) -> &str;
}
