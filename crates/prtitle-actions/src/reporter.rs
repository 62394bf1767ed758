//! The channels a step uses to talk back to its host.

use crate::error::Result;

/// Step outputs, log lines and the failure channel.
///
/// [`crate::WorkflowReporter`] speaks the runner's protocol;
/// [`crate::MemoryReporter`] records calls for tests and local runs.
pub trait Reporter {
    /// Publish a named step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Informational log line.
    fn info(&mut self, message: &str) -> Result<()>;

    /// Error log line. Does not fail the step by itself.
    fn error(&mut self, message: &str) -> Result<()>;

    /// Log `message` as an error and mark the step as failed.
    fn set_failed(&mut self, message: &str) -> Result<()>;

    /// Whether `set_failed` has been called.
    fn failed(&self) -> bool;
}
