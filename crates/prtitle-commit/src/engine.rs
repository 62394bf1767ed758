//! Adapter over the `git-conventional` grammar engine.

use git_conventional::Commit;

use crate::ast::{CommitAst, CommitFooter, CommitHeader};
use crate::error::{CommitError, Result};
use crate::parser::ConventionalParser;

/// [`ConventionalParser`] backed by the `git-conventional` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitConventionalParser;

impl GitConventionalParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConventionalParser for GitConventionalParser {
    fn parse(&self, text: &str) -> Result<CommitAst> {
        let commit = Commit::parse(text).map_err(|e| CommitError::Grammar(e.to_string()))?;
        tracing::debug!(
            commit_type = commit.type_().as_str(),
            breaking = commit.breaking(),
            "GitConventionalParser: parsed commit"
        );

        let footers: Vec<CommitFooter> = commit
            .footers()
            .iter()
            .map(|footer| CommitFooter {
                token: footer.token().as_str().to_string(),
                value: footer.value().to_string(),
            })
            .collect();

        let breaking_marker = header_has_marker(text, commit.description())
            .unwrap_or_else(|| commit.breaking() && !footers.iter().any(|f| f.is_breaking()));

        Ok(CommitAst {
            header: CommitHeader {
                commit_type: commit.type_().as_str().to_string(),
                scope: commit.scope().map(|scope| scope.as_str().to_string()),
                breaking_marker,
                description: commit.description().to_string(),
            },
            body: commit.body().map(str::to_string),
            footers,
        })
    }

    fn name(&self) -> &str {
        "git-conventional"
    }
}

/// Look for `!` between the type/scope and the colon of the header line.
///
/// Returns `None` when the description cannot be located on the first line.
fn header_has_marker(text: &str, description: &str) -> Option<bool> {
    let header = text.lines().next()?.trim_end();
    let prefix = header.strip_suffix(description)?;
    let prefix = prefix.trim_end().strip_suffix(':')?;
    Some(prefix.ends_with('!'))
}
