//! Event gate: reject every event except `pull_request`.

use prtitle_actions::InvocationContext;

use crate::config::ACCEPTED_EVENT;

/// Failure message for a run triggered by the wrong event, or `None` when
/// the run may proceed.
pub fn rejection(ctx: &InvocationContext) -> Option<String> {
    if ctx.event_name == ACCEPTED_EVENT {
        return None;
    }
    Some(format!(
        "Invalid event: {}. This action can only be used on '{}'",
        ctx.event_name, ACCEPTED_EVENT
    ))
}
