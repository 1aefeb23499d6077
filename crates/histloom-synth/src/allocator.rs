//! Timeline allocation: one timeline per origin project, bounded.

use std::collections::BTreeSet;

/// Default cap on distinct timelines per synthesis run.
pub const DEFAULT_MAX_TIMELINES: usize = 5;

/// Outcome of assigning one event to a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub timeline: String,
    pub must_create: bool,
}

/// Allocator state for exactly one synthesis run.
///
/// Owned by the caller, created at run start and discarded at run end;
/// nothing here persists across runs.
#[derive(Debug)]
pub struct AllocatorState {
    max_timelines: usize,
    seen_projects: BTreeSet<String>,
    created_timelines: BTreeSet<String>,
    active_timelines: BTreeSet<String>,
}

impl AllocatorState {
    pub fn new(max_timelines: usize) -> Self {
        Self {
            max_timelines,
            seen_projects: BTreeSet::new(),
            created_timelines: BTreeSet::new(),
            active_timelines: BTreeSet::new(),
        }
    }

    /// Assign an event's origin project to a timeline, or `None` when
    /// the project falls outside the timeline cap and the event is
    /// dropped. Drops are routine, not errors.
    ///
    /// The cap counts *seen* projects, not created timelines: a
    /// project consumes its slot the first time it appears, whether or
    /// not it ever contributes a change.
    pub fn assign(&mut self, origin_project: &str) -> Option<Assignment> {
        let name = timeline_name(origin_project);

        if !self.seen_projects.contains(name) {
            if self.seen_projects.len() >= self.max_timelines {
                tracing::debug!(project = origin_project, "timeline cap reached, dropping event");
                return None;
            }
            self.seen_projects.insert(name.to_string());
        }

        let must_create = !self.created_timelines.contains(name);
        if must_create {
            self.created_timelines.insert(name.to_string());
            self.active_timelines.insert(name.to_string());
        }

        Some(Assignment {
            timeline: name.to_string(),
            must_create,
        })
    }

    /// Timelines that received at least one change, in lexicographic
    /// order. Read by the reconciler; never mutated by it.
    pub fn active_timelines(&self) -> &BTreeSet<String> {
        &self.active_timelines
    }

    pub fn created_count(&self) -> usize {
        self.created_timelines.len()
    }
}

/// Last path segment of the origin project, e.g. `owner/repo` → `repo`.
pub fn timeline_name(origin_project: &str) -> &str {
    origin_project
        .rsplit('/')
        .next()
        .unwrap_or(origin_project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_name_takes_last_segment() {
        assert_eq!(timeline_name("owner/repo"), "repo");
        assert_eq!(timeline_name("org/group/tool"), "tool");
        assert_eq!(timeline_name("bare"), "bare");
    }

    #[test]
    fn name_derivation_is_idempotent_within_a_run() {
        let mut state = AllocatorState::new(5);
        let first = state.assign("owner/repo").expect("within cap");
        let second = state.assign("owner/repo").expect("within cap");
        assert_eq!(first.timeline, second.timeline);
    }

    #[test]
    fn first_assignment_creates_later_ones_continue() {
        let mut state = AllocatorState::new(5);
        assert!(state.assign("a/x").expect("within cap").must_create);
        assert!(!state.assign("a/x").expect("within cap").must_create);
        assert_eq!(state.created_count(), 1);
    }

    #[test]
    fn cap_drops_events_from_excess_projects() {
        let mut state = AllocatorState::new(2);
        assert!(state.assign("a/one").is_some());
        assert!(state.assign("a/two").is_some());
        assert!(state.assign("a/three").is_none());
        // Projects already within the cap keep flowing.
        assert!(state.assign("a/one").is_some());
        assert_eq!(state.created_count(), 2);
    }

    #[test]
    fn cap_is_seen_based_and_a_slot_is_never_returned() {
        let mut state = AllocatorState::new(1);
        // First project takes the only slot even though the caller may
        // end up recording nothing for it.
        assert!(state.assign("a/first").is_some());
        assert!(state.assign("a/second").is_none());
        assert!(state.assign("a/first").is_some());
    }

    #[test]
    fn active_timelines_iterate_lexicographically() {
        let mut state = AllocatorState::new(5);
        state.assign("a/zebra");
        state.assign("a/apple");
        state.assign("a/mango");
        let names: Vec<&str> = state
            .active_timelines()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["apple", "mango", "zebra"]);
    }
}
