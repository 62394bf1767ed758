// config.rs — Validator configuration, read once from the step inputs.

use prtitle_actions::{ActionError, ActionInputs};

/// The only event kind a run accepts.
pub const ACCEPTED_EVENT: &str = "pull_request";

/// Input controlling escalation of invalid titles.
pub const FAIL_WHEN_INVALID_INPUT: &str = "fail_when_invalid";

/// Settings for one validation run. Immutable once read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Fail the step when the title does not parse. Default: false.
    pub fail_when_invalid: bool,
}

impl ValidatorConfig {
    /// Read the configuration from the step inputs.
    ///
    /// An unset input falls back to the default; a value that is not a
    /// core-schema boolean is an error.
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self, ActionError> {
        let fail_when_invalid = inputs
            .get_boolean_input(FAIL_WHEN_INVALID_INPUT, false)?
            .unwrap_or_default();
        Ok(Self { fail_when_invalid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_not_failing() {
        let config = ValidatorConfig::from_inputs(&ActionInputs::default()).unwrap();
        assert!(!config.fail_when_invalid);
    }

    #[test]
    fn reads_fail_when_invalid() {
        let inputs = ActionInputs::from_pairs([(FAIL_WHEN_INVALID_INPUT, "TRUE")]);
        assert!(ValidatorConfig::from_inputs(&inputs).unwrap().fail_when_invalid);
    }

    #[test]
    fn rejects_non_boolean() {
        let inputs = ActionInputs::from_pairs([(FAIL_WHEN_INVALID_INPUT, "1")]);
        assert!(ValidatorConfig::from_inputs(&inputs).is_err());
    }
}
