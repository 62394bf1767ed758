// validator.rs — TitleValidator: gate, extract, validate, report.
//
// Only a grammar failure is recoverable: it is reported as `valid=false`
// and escalated when configured. Every other error aborts the run and
// becomes a hard failure carrying the error's own message.

use prtitle_actions::{ActionError, ActionInputs, InvocationContext, Reporter};
use prtitle_commit::ConventionalParser;

use crate::config::ValidatorConfig;
use crate::gate;
use crate::outcome::{outputs, ParseOutcome, RunState, TitleReport};

/// Hard-failure message for an invalid title when escalation is enabled.
pub const INVALID_TITLE_MESSAGE: &str = "Pull Request title is not valid";

/// Validates pull-request titles with a pluggable grammar engine.
///
/// Holds no state between runs: the same context and inputs always produce
/// the same reporter calls.
pub struct TitleValidator<P: ConventionalParser> {
    parser: P,
}

impl<P: ConventionalParser> TitleValidator<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Parse and normalize a title without touching any host channel.
    pub fn evaluate(&self, title: &str) -> ParseOutcome {
        match self.parser.parse(title) {
            Ok(ast) => {
                let commit = self.parser.normalize(&ast);
                ParseOutcome::Valid(TitleReport::from_commit(title, &commit))
            }
            Err(e) => ParseOutcome::Invalid {
                title: title.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Run one validation for the given invocation.
    ///
    /// Unexpected errors are reported through `reporter.set_failed` and end
    /// the run in [`RunState::Aborted`]. An `Err` is returned only when the
    /// failure channel itself cannot be written.
    pub fn run(
        &self,
        ctx: &InvocationContext,
        inputs: &ActionInputs,
        reporter: &mut dyn Reporter,
    ) -> Result<RunState, ActionError> {
        match self.execute(ctx, inputs, reporter) {
            Ok(state) => {
                tracing::debug!(?state, "validation run finished");
                Ok(state)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::error!(error = %message, "validation run aborted");
                reporter.set_failed(&message)?;
                Ok(RunState::Aborted { message })
            }
        }
    }

    fn execute(
        &self,
        ctx: &InvocationContext,
        inputs: &ActionInputs,
        reporter: &mut dyn Reporter,
    ) -> Result<RunState, ActionError> {
        if let Some(message) = gate::rejection(ctx) {
            reporter.set_failed(&message)?;
            return Ok(RunState::Rejected { message });
        }

        let config = ValidatorConfig::from_inputs(inputs)?;
        // An absent title is forwarded as empty text and fails the grammar.
        let title = ctx.title().unwrap_or_default();
        reporter.info(&format!("Title: {}", title))?;

        tracing::debug!(parser = self.parser.name(), ?config, "validating title");
        self.report(title, config, reporter)
    }

    fn report(
        &self,
        title: &str,
        config: ValidatorConfig,
        reporter: &mut dyn Reporter,
    ) -> Result<RunState, ActionError> {
        match self.evaluate(title) {
            ParseOutcome::Valid(report) => {
                reporter.set_output(outputs::VALID, "true")?;
                for (name, value) in report.outputs() {
                    reporter.set_output(name, &value)?;
                }
                Ok(RunState::Valid(report))
            }
            ParseOutcome::Invalid { reason, .. } => {
                reporter.set_output(outputs::VALID, "false")?;
                reporter.error(&format!("Unable to parse title. Error: {}", reason))?;

                if config.fail_when_invalid {
                    reporter.set_failed(INVALID_TITLE_MESSAGE)?;
                    Ok(RunState::InvalidEscalated { reason })
                } else {
                    Ok(RunState::Invalid { reason })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prtitle_actions::{EventPayload, MemoryReporter};
    use prtitle_commit::{CommitAst, CommitError, CommitFooter, CommitHeader};

    /// Parser stub: accepts exactly one title, rejects everything else.
    struct StubParser {
        accept: &'static str,
    }

    impl ConventionalParser for StubParser {
        fn parse(&self, text: &str) -> prtitle_commit::error::Result<CommitAst> {
            if text != self.accept {
                return Err(CommitError::Grammar("stub rejects this".to_string()));
            }
            Ok(CommitAst {
                header: CommitHeader {
                    commit_type: "chore".to_string(),
                    scope: None,
                    breaking_marker: false,
                    description: "stubbed".to_string(),
                },
                body: None,
                footers: vec![CommitFooter {
                    token: "BREAKING CHANGE".to_string(),
                    value: "from footer".to_string(),
                }],
            })
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn validator() -> TitleValidator<StubParser> {
        TitleValidator::new(StubParser { accept: "ok" })
    }

    #[test]
    fn rejected_event_sets_no_outputs() {
        let ctx = InvocationContext::new("push", EventPayload::default());
        let mut reporter = MemoryReporter::new();

        let state = validator()
            .run(&ctx, &ActionInputs::default(), &mut reporter)
            .unwrap();

        assert!(matches!(state, RunState::Rejected { .. }));
        assert!(reporter.outputs.is_empty());
        assert!(reporter.infos.is_empty());
        assert_eq!(
            reporter.failures,
            vec!["Invalid event: push. This action can only be used on 'pull_request'"]
        );
    }

    #[test]
    fn rejected_event_skips_input_coercion() {
        // A malformed input must not matter when the gate already rejected.
        let ctx = InvocationContext::new("push", EventPayload::default());
        let inputs = ActionInputs::from_pairs([("fail_when_invalid", "maybe")]);
        let mut reporter = MemoryReporter::new();

        let state = validator().run(&ctx, &inputs, &mut reporter).unwrap();
        assert!(matches!(state, RunState::Rejected { .. }));
        assert_eq!(reporter.failures.len(), 1);
    }

    #[test]
    fn valid_title_uses_normalized_notes() {
        let mut reporter = MemoryReporter::new();
        let state = validator()
            .run(
                &InvocationContext::pull_request("ok"),
                &ActionInputs::default(),
                &mut reporter,
            )
            .unwrap();

        assert!(matches!(state, RunState::Valid(_)));
        assert_eq!(reporter.infos, vec!["Title: ok"]);
        assert_eq!(reporter.output("valid"), Some("true"));
        assert_eq!(reporter.output("title"), Some("ok"));
        assert_eq!(reporter.output("type"), Some("chore"));
        assert_eq!(reporter.output("scope"), Some(""));
        assert_eq!(reporter.output("breaking_change"), Some("true"));
        assert!(!reporter.failed());
    }

    #[test]
    fn grammar_error_reason_is_logged() {
        let mut reporter = MemoryReporter::new();
        let state = validator()
            .run(
                &InvocationContext::pull_request("nope"),
                &ActionInputs::default(),
                &mut reporter,
            )
            .unwrap();

        assert_eq!(
            state,
            RunState::Invalid {
                reason: "stub rejects this".to_string()
            }
        );
        assert_eq!(
            reporter.errors,
            vec!["Unable to parse title. Error: stub rejects this"]
        );
        assert_eq!(reporter.outputs, vec![("valid".to_string(), "false".to_string())]);
    }

    #[test]
    fn absent_title_is_parsed_as_empty_text() {
        let ctx = InvocationContext::new("pull_request", EventPayload::default());
        let mut reporter = MemoryReporter::new();

        let state = validator()
            .run(&ctx, &ActionInputs::default(), &mut reporter)
            .unwrap();

        assert!(matches!(state, RunState::Invalid { .. }));
        assert_eq!(reporter.infos, vec!["Title: "]);
        assert_eq!(reporter.output("valid"), Some("false"));
    }

    #[test]
    fn bad_boolean_input_aborts_with_its_message() {
        let inputs = ActionInputs::from_pairs([("fail_when_invalid", "yes")]);
        let mut reporter = MemoryReporter::new();

        let state = validator()
            .run(&InvocationContext::pull_request("ok"), &inputs, &mut reporter)
            .unwrap();

        let message = match state {
            RunState::Aborted { message } => message,
            other => panic!("expected Aborted, got {other:?}"),
        };
        assert!(message.contains("fail_when_invalid"));
        assert_eq!(reporter.failures, vec![message]);
        assert!(reporter.outputs.is_empty());
    }
}
