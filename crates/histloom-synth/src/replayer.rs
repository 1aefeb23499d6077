//! Change replay: one event's sub-changes become recorded changes.

use crate::allocator::Assignment;
use crate::store::{HistoryStore, ROOT_TIMELINE, StoreError};
use histloom_feed::PushEvent;

/// Message recorded when a push event carries no commits of its own.
pub const PLACEHOLDER_MESSAGE: &str = "Update";

/// Record the event's commits on its assigned timeline.
///
/// A fresh timeline is branched from the root after an explicit switch
/// to the root, so creation never depends on whatever the store's
/// current pointer happened to be. Every change shares the event's
/// timestamp: the event, not the commit, is the unit of time
/// resolution. An event without commits records exactly one
/// placeholder change.
///
/// Returns the number of changes recorded, `max(1, |commits|)`. Any
/// store failure aborts the run; there is no retry.
pub fn replay_event<S: HistoryStore>(
    store: &mut S,
    assignment: &Assignment,
    event: &PushEvent,
) -> Result<usize, StoreError> {
    if assignment.must_create {
        store.switch_timeline(ROOT_TIMELINE)?;
        store.create_timeline(&assignment.timeline, ROOT_TIMELINE)?;
    } else {
        store.switch_timeline(&assignment.timeline)?;
    }

    if event.commits.is_empty() {
        let message = format!("{}: {PLACEHOLDER_MESSAGE}", assignment.timeline);
        store.record_change(&message, event.created_at)?;
        return Ok(1);
    }

    for commit in &event.commits {
        let message = format!(
            "{}: {}",
            assignment.timeline,
            first_line(&commit.message)
        );
        store.record_change(&message, event.created_at)?;
    }
    Ok(event.commits.len())
}

fn first_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or(message)
}

#[cfg(test)]
mod tests {
    use super::first_line;

    #[test]
    fn first_line_truncates_multiline_messages() {
        assert_eq!(first_line("subject\n\nbody text"), "subject");
        assert_eq!(first_line("single line"), "single line");
        assert_eq!(first_line(""), "");
    }
}
