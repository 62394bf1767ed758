// context.rs — Invocation context: which event triggered the run and its payload.
//
// The runner exposes the event name in GITHUB_EVENT_NAME and writes the
// webhook payload to the file named by GITHUB_EVENT_PATH. Only the fields the
// validator needs are modelled; everything else in the payload is ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ActionError, Result};

/// Env var holding the triggering event name.
pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";

/// Env var holding the path of the webhook payload JSON.
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Webhook payload, reduced to the pull-request fields we read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// The `pull_request` object of a webhook payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Everything the host tells us about the current invocation.
///
/// Read-only for the rest of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub event_name: String,
    pub payload: EventPayload,
}

impl InvocationContext {
    pub fn new(event_name: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            event_name: event_name.into(),
            payload,
        }
    }

    /// Context for a `pull_request` event whose PR carries `title`.
    pub fn pull_request(title: impl Into<String>) -> Self {
        Self::new(
            "pull_request",
            EventPayload {
                pull_request: Some(PullRequest {
                    number: None,
                    title: Some(title.into()),
                }),
            },
        )
    }

    /// Build the context from an event name and an optional payload file.
    ///
    /// A missing payload file is not an error: the runner omits it for some
    /// events, and the context then carries an empty payload.
    pub fn load(event_name: impl Into<String>, event_path: Option<&Path>) -> Result<Self> {
        let event_name = event_name.into();
        let payload = match event_path {
            Some(path) if path.exists() => read_payload(path)?,
            Some(path) => {
                tracing::warn!("{} {} does not exist", EVENT_PATH_VAR, path.display());
                EventPayload::default()
            }
            None => EventPayload::default(),
        };
        tracing::debug!(event = %event_name, has_pull_request = payload.pull_request.is_some(), "loaded invocation context");
        Ok(Self::new(event_name, payload))
    }

    /// The pull-request title, if the payload carries one.
    pub fn title(&self) -> Option<&str> {
        self.payload
            .pull_request
            .as_ref()
            .and_then(|pr| pr.title.as_deref())
    }
}

fn read_payload(path: &Path) -> Result<EventPayload> {
    let json = fs::read_to_string(path).map_err(|source| ActionError::PayloadRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| ActionError::PayloadParse {
        path: path.to_path_buf(),
        source,
    })
}
