//! # prtitle-actions
//!
//! Host runtime for running inside a GitHub Actions job.
//!
//! Everything the runner hands to a step, and everything a step hands back,
//! goes through this crate:
//!
//! - [`InvocationContext`] — event name and webhook payload, loaded from
//!   `GITHUB_EVENT_NAME` / `GITHUB_EVENT_PATH` and passed around explicitly
//! - [`ActionInputs`] — `INPUT_*` variables with the runner's coercion rules
//! - [`Reporter`] — step outputs, the log channel and the failure channel
//! - [`WorkflowReporter`] — writes workflow commands and the `GITHUB_OUTPUT` file
//! - [`MemoryReporter`] — records every call, for tests and local runs

pub mod context;
pub mod error;
pub mod inputs;
pub mod memory;
pub mod reporter;
pub mod workflow;

pub use context::{EventPayload, InvocationContext, PullRequest};
pub use error::ActionError;
pub use inputs::ActionInputs;
pub use memory::MemoryReporter;
pub use reporter::Reporter;
pub use workflow::WorkflowReporter;
