//! Reconciliation: fold every touched timeline back into the root.

use crate::store::{HistoryStore, ROOT_TIMELINE, StoreError};
use std::collections::BTreeSet;

/// Merge all timelines that received changes into the root timeline.
///
/// One multi-parent merge, timelines named in lexicographic order. An
/// empty set is a no-op. Failure of the merge itself is logged and
/// swallowed: at this late stage a partial composite history beats no
/// output. Failing to reach the root first is still fatal, since it
/// means the store is in a broken state.
pub fn reconcile<S: HistoryStore>(
    store: &mut S,
    active_timelines: &BTreeSet<String>,
) -> Result<(), StoreError> {
    if active_timelines.is_empty() {
        return Ok(());
    }

    store.switch_timeline(ROOT_TIMELINE)?;

    let names: Vec<String> = active_timelines.iter().cloned().collect();
    if let Err(err) = store.merge_timelines(&names) {
        tracing::warn!(error = %err, "reconcile merge failed, leaving timelines unmerged");
    }
    Ok(())
}
