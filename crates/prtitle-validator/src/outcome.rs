// outcome.rs — Result types for a validation run.
//
// ParseOutcome is what the grammar said about a title. RunState is the
// terminal state the whole run ended in, including the paths that never
// reach the parser.

use prtitle_commit::NormalizedCommit;
use serde::Serialize;

/// Step output names.
pub mod outputs {
    pub const VALID: &str = "valid";
    pub const TITLE: &str = "title";
    pub const TYPE: &str = "type";
    pub const SCOPE: &str = "scope";
    pub const SUBJECT: &str = "subject";
    pub const BREAKING_CHANGE: &str = "breaking_change";
}

/// Decomposition of a valid title, as published to downstream steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleReport {
    /// The input text, unmodified.
    pub title: String,
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Empty when the title has no scope.
    pub scope: String,
    pub subject: String,
    pub breaking_change: bool,
}

impl TitleReport {
    pub fn from_commit(title: &str, commit: &NormalizedCommit) -> Self {
        Self {
            title: title.to_string(),
            commit_type: commit.commit_type.clone(),
            scope: commit.scope.clone().unwrap_or_default(),
            subject: commit.subject.clone(),
            breaking_change: commit.is_breaking(),
        }
    }

    /// Output name/value pairs, in publishing order (after `valid`).
    pub fn outputs(&self) -> [(&'static str, String); 5] {
        [
            (outputs::TITLE, self.title.clone()),
            (outputs::TYPE, self.commit_type.clone()),
            (outputs::SCOPE, self.scope.clone()),
            (outputs::SUBJECT, self.subject.clone()),
            (outputs::BREAKING_CHANGE, self.breaking_change.to_string()),
        ]
    }
}

/// What the parser made of a title. Exactly one per validated title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ParseOutcome {
    Valid(TitleReport),
    Invalid { title: String, reason: String },
}

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseOutcome::Valid(_))
    }
}

/// Terminal state of a run.
///
/// ```text
/// Start → gate ─┬─ Rejected
///               └─ extracted ─┬─ Valid
///                             ├─ Invalid
///                             └─ InvalidEscalated
/// ```
///
/// `Aborted` covers unexpected errors anywhere outside the parse itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Rejected { message: String },
    Valid(TitleReport),
    Invalid { reason: String },
    InvalidEscalated { reason: String },
    Aborted { message: String },
}

impl RunState {
    /// Whether this state ends the step with a hard failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RunState::Rejected { .. } | RunState::InvalidEscalated { .. } | RunState::Aborted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prtitle_commit::Note;

    fn commit(scope: Option<&str>, notes: Vec<Note>) -> NormalizedCommit {
        NormalizedCommit {
            commit_type: "fix".to_string(),
            scope: scope.map(str::to_string),
            subject: "undo the confrigulators".to_string(),
            body: None,
            notes,
        }
    }

    #[test]
    fn missing_scope_reports_empty_string() {
        let report = TitleReport::from_commit("fix: undo the confrigulators", &commit(None, vec![]));
        assert_eq!(report.scope, "");
        assert!(!report.breaking_change);
    }

    #[test]
    fn outputs_in_order() {
        let notes = vec![Note {
            title: "BREAKING CHANGE".to_string(),
            text: "x".to_string(),
        }];
        let report = TitleReport::from_commit(
            "fix(main)!: undo the confrigulators",
            &commit(Some("main"), notes),
        );
        let names: Vec<&str> = report.outputs().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["title", "type", "scope", "subject", "breaking_change"]);
        assert_eq!(report.outputs()[4].1, "true");
    }

    #[test]
    fn parse_outcome_json_shape() {
        let outcome = ParseOutcome::Invalid {
            title: "invalid title".to_string(),
            reason: "missing type".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "invalid");
        assert_eq!(json["reason"], "missing type");
        assert!(!outcome.is_valid());
    }

    #[test]
    fn failure_states() {
        assert!(RunState::Rejected { message: String::new() }.is_failure());
        assert!(RunState::Aborted { message: String::new() }.is_failure());
        assert!(RunState::InvalidEscalated { reason: String::new() }.is_failure());
        assert!(!RunState::Invalid { reason: String::new() }.is_failure());
    }
}
