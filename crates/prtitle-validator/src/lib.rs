//! # prtitle-validator
//!
//! Checks that a pull-request title is a valid Conventional Commit and
//! publishes the decomposition as step outputs.
//!
//! A run is three steps composed in sequence:
//!
//! 1. **Event gate** ([`gate`]) — only `pull_request` events are accepted
//! 2. **Title extraction** — read `fail_when_invalid` and the PR title
//! 3. **Validation & reporting** — parse, then either publish
//!    `valid/title/type/scope/subject/breaking_change` or report the failure
//!
//! The run is a pure function of its [`InvocationContext`], its
//! [`ActionInputs`] and the parser; all side effects go through a
//! [`Reporter`].
//!
//! [`InvocationContext`]: prtitle_actions::InvocationContext
//! [`ActionInputs`]: prtitle_actions::ActionInputs
//! [`Reporter`]: prtitle_actions::Reporter

pub mod config;
pub mod gate;
pub mod outcome;
pub mod validator;

pub use config::{ValidatorConfig, ACCEPTED_EVENT, FAIL_WHEN_INVALID_INPUT};
pub use outcome::{ParseOutcome, RunState, TitleReport};
pub use validator::{TitleValidator, INVALID_TITLE_MESSAGE};
