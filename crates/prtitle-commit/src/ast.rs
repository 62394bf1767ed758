// ast.rs — Engine-neutral syntax tree for a parsed commit message.
//
// Adapters translate their engine's representation into these owned types,
// so nothing outside the adapter depends on a particular grammar crate.

use serde::Serialize;

/// Footer tokens that announce an incompatible change.
const BREAKING_TOKENS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

/// Parsed commit message: header, optional body and trailing footers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitAst {
    pub header: CommitHeader,
    pub body: Option<String>,
    pub footers: Vec<CommitFooter>,
}

/// The first line: `type(scope)!: description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitHeader {
    pub commit_type: String,
    pub scope: Option<String>,
    /// `!` before the colon.
    pub breaking_marker: bool,
    pub description: String,
}

/// A `token: value` or `token #value` trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitFooter {
    pub token: String,
    pub value: String,
}

impl CommitFooter {
    /// Whether this footer is a `BREAKING CHANGE` (or `BREAKING-CHANGE`) trailer.
    pub fn is_breaking(&self) -> bool {
        BREAKING_TOKENS.contains(&self.token.as_str())
    }
}
