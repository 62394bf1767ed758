// memory.rs — In-memory reporter that records every call.

use crate::error::Result;
use crate::reporter::Reporter;

/// Reporter that keeps outputs and log lines in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryReporter {
    /// Outputs in the order they were set.
    pub outputs: Vec<(String, String)>,
    pub infos: Vec<String>,
    pub errors: Vec<String>,
    /// Messages passed to `set_failed`.
    pub failures: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for an output.
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Reporter for MemoryReporter {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.infos.push(message.to_string());
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }

    fn set_failed(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_string());
        self.failures.push(message.to_string());
        Ok(())
    }

    fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}
