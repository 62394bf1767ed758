// normalize.rs — Flatten a CommitAst into the changelog-style record.
//
// The record mirrors what changelog tooling consumes: type, scope, subject
// and an ordered list of notes. Both ways of flagging an incompatible change
// (the `!` header marker and a BREAKING CHANGE footer) end up as a note with
// the same title, so consumers only need a membership test.

use serde::Serialize;

use crate::ast::CommitAst;

/// Title shared by every breaking-change note.
pub const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// An annotation attached to a normalized commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub title: String,
    pub text: String,
}

/// Flat view of a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCommit {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub scope: Option<String>,
    pub subject: String,
    pub body: Option<String>,
    pub notes: Vec<Note>,
}

impl NormalizedCommit {
    /// True if any note is a breaking-change note.
    pub fn is_breaking(&self) -> bool {
        self.notes.iter().any(|note| note.title == BREAKING_CHANGE)
    }
}

/// Convert a parsed commit into its normalized record.
///
/// Every breaking footer becomes one note carrying the footer value. A `!`
/// marker without any breaking footer becomes a single note whose text is
/// the subject.
pub fn normalize(ast: &CommitAst) -> NormalizedCommit {
    let mut notes: Vec<Note> = ast
        .footers
        .iter()
        .filter(|footer| footer.is_breaking())
        .map(|footer| Note {
            title: BREAKING_CHANGE.to_string(),
            text: footer.value.clone(),
        })
        .collect();

    if ast.header.breaking_marker && notes.is_empty() {
        notes.push(Note {
            title: BREAKING_CHANGE.to_string(),
            text: ast.header.description.clone(),
        });
    }

    NormalizedCommit {
        commit_type: ast.header.commit_type.clone(),
        scope: ast.header.scope.clone(),
        subject: ast.header.description.clone(),
        body: ast.body.clone(),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CommitFooter, CommitHeader};

    fn ast(marker: bool, footers: Vec<CommitFooter>) -> CommitAst {
        CommitAst {
            header: CommitHeader {
                commit_type: "feat".to_string(),
                scope: Some("api".to_string()),
                breaking_marker: marker,
                description: "drop v1 endpoints".to_string(),
            },
            body: None,
            footers,
        }
    }

    fn footer(token: &str, value: &str) -> CommitFooter {
        CommitFooter {
            token: token.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn plain_commit_has_no_notes() {
        let commit = normalize(&ast(false, vec![footer("Refs", "#12")]));
        assert_eq!(commit.commit_type, "feat");
        assert_eq!(commit.scope.as_deref(), Some("api"));
        assert_eq!(commit.subject, "drop v1 endpoints");
        assert!(commit.notes.is_empty());
        assert!(!commit.is_breaking());
    }

    #[test]
    fn marker_becomes_note_with_subject() {
        let commit = normalize(&ast(true, vec![]));
        assert_eq!(
            commit.notes,
            vec![Note {
                title: BREAKING_CHANGE.to_string(),
                text: "drop v1 endpoints".to_string(),
            }]
        );
        assert!(commit.is_breaking());
    }

    #[test]
    fn footer_becomes_note_with_value() {
        let commit = normalize(&ast(
            false,
            vec![footer("BREAKING-CHANGE", "clients must migrate")],
        ));
        assert_eq!(commit.notes.len(), 1);
        assert_eq!(commit.notes[0].title, BREAKING_CHANGE);
        assert_eq!(commit.notes[0].text, "clients must migrate");
    }

    #[test]
    fn marker_and_footer_yield_single_note() {
        let commit = normalize(&ast(
            true,
            vec![footer("BREAKING CHANGE", "clients must migrate")],
        ));
        assert_eq!(commit.notes.len(), 1);
        assert_eq!(commit.notes[0].text, "clients must migrate");
    }

    #[test]
    fn serializes_type_field_name() {
        let commit = normalize(&ast(false, vec![]));
        let json = serde_json::to_value(&commit).unwrap();
        assert_eq!(json["type"], "feat");
        assert_eq!(json["scope"], "api");
    }
}
