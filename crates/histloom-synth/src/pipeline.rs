//! End-to-end synthesis: ordered events in, composite history out.

use crate::allocator::AllocatorState;
use crate::reconciler::reconcile;
use crate::replayer::replay_event;
use crate::store::{HistoryStore, StoreError};
use histloom_feed::PushEvent;
use serde::Serialize;

/// Errors that abort a synthesis run.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// The event sequence was empty. The feed layer already rejects
    /// this; handled here too rather than panicking on `events[0]`.
    #[error("no events to synthesize")]
    NoEvents,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Totals for one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub timelines_created: usize,
    pub changes_recorded: usize,
    pub events_replayed: usize,
    pub events_dropped: usize,
}

/// Replay the ordered event sequence into `store`, then reconcile.
///
/// `events` must already be sorted ascending by `created_at`; the
/// allocator does not re-sort. The root timeline is stamped with the
/// first event's timestamp so the whole history starts at observed
/// time, not at run time.
pub fn synthesize<S: HistoryStore>(
    store: &mut S,
    events: &[PushEvent],
    max_timelines: usize,
) -> Result<Summary, SynthError> {
    let first = events.first().ok_or(SynthError::NoEvents)?;
    store.init_root(first.created_at)?;

    let mut state = AllocatorState::new(max_timelines);
    let mut summary = Summary {
        timelines_created: 0,
        changes_recorded: 0,
        events_replayed: 0,
        events_dropped: 0,
    };

    for event in events {
        let Some(assignment) = state.assign(&event.repo) else {
            summary.events_dropped += 1;
            continue;
        };
        summary.changes_recorded += replay_event(store, &assignment, event)?;
        summary.events_replayed += 1;
    }

    summary.timelines_created = state.created_count();
    reconcile(store, state.active_timelines())?;

    tracing::info!(
        timelines = summary.timelines_created,
        changes = summary.changes_recorded,
        dropped = summary.events_dropped,
        "synthesis complete"
    );
    Ok(summary)
}
