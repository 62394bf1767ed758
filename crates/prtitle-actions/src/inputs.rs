// inputs.rs — Step inputs as the runner provides them.
//
// The runner exports each `with:` input as INPUT_<NAME>, where NAME is the
// input name upper-cased with spaces replaced by underscores. Values are
// trimmed before use.

use std::collections::HashMap;

use crate::error::{ActionError, Result};

const INPUT_PREFIX: &str = "INPUT_";

/// YAML 1.2 core schema booleans accepted for boolean inputs.
const TRUE_VALUES: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_VALUES: [&str; 3] = ["false", "False", "FALSE"];

/// Snapshot of the step's inputs, keyed by env var name.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    values: HashMap<String, String>,
}

impl ActionInputs {
    /// Capture every `INPUT_*` variable from the process environment.
    pub fn from_env() -> Self {
        let values = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter(|(key, _)| key.starts_with(INPUT_PREFIX))
            .collect();
        Self { values }
    }

    /// Build inputs from `(input name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(name, value)| (env_key(name.as_ref()), value.into()))
            .collect();
        Self { values }
    }

    /// Trimmed value of an input; empty when unset.
    pub fn get_input(&self, name: &str, required: bool) -> Result<String> {
        let value = self
            .values
            .get(&env_key(name))
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        if required && value.is_empty() {
            return Err(ActionError::InputRequired(name.to_string()));
        }
        Ok(value)
    }

    /// Boolean input, `None` when unset and not required.
    pub fn get_boolean_input(&self, name: &str, required: bool) -> Result<Option<bool>> {
        let value = self.get_input(name, required)?;
        if value.is_empty() {
            return Ok(None);
        }
        if TRUE_VALUES.contains(&value.as_str()) {
            Ok(Some(true))
        } else if FALSE_VALUES.contains(&value.as_str()) {
            Ok(Some(false))
        } else {
            Err(ActionError::InvalidBooleanInput {
                name: name.to_string(),
            })
        }
    }
}

fn env_key(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_follows_runner_convention() {
        assert_eq!(env_key("fail_when_invalid"), "INPUT_FAIL_WHEN_INVALID");
        assert_eq!(env_key("my input"), "INPUT_MY_INPUT");
    }

    #[test]
    fn get_input_trims() {
        let inputs = ActionInputs::from_pairs([("token", "  abc \n")]);
        assert_eq!(inputs.get_input("token", false).unwrap(), "abc");
    }

    #[test]
    fn missing_required_input() {
        let inputs = ActionInputs::default();
        let err = inputs.get_input("token", true).unwrap_err();
        assert_eq!(err.to_string(), "Input required and not supplied: token");
    }

    #[test]
    fn boolean_core_schema_values() {
        for (raw, expected) in [
            ("true", true),
            ("True", true),
            ("TRUE", true),
            ("false", false),
            ("False", false),
            ("FALSE", false),
        ] {
            let inputs = ActionInputs::from_pairs([("flag", raw)]);
            assert_eq!(inputs.get_boolean_input("flag", false).unwrap(), Some(expected));
        }
    }

    #[test]
    fn boolean_unset_is_none() {
        let inputs = ActionInputs::from_pairs([("flag", "   ")]);
        assert_eq!(inputs.get_boolean_input("flag", false).unwrap(), None);
        assert_eq!(ActionInputs::default().get_boolean_input("flag", false).unwrap(), None);
    }

    #[test]
    fn boolean_rejects_other_spellings() {
        let inputs = ActionInputs::from_pairs([("flag", "yes")]);
        let err = inputs.get_boolean_input("flag", false).unwrap_err();
        assert!(matches!(err, ActionError::InvalidBooleanInput { ref name } if name == "flag"));
        assert!(err
            .to_string()
            .starts_with("Input does not meet YAML 1.2 \"Core Schema\" specification: flag"));
    }
}
