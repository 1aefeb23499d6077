//! History store boundary.
//!
//! The store keeps one global "current timeline" pointer. Callers must
//! switch explicitly before recording or merging and never rely on the
//! pointer surviving a previous operation.

use chrono::{DateTime, Utc};

/// Name of the shared root timeline every other timeline branches from.
pub const ROOT_TIMELINE: &str = "main";

/// A history store operation failed.
#[derive(Debug, thiserror::Error)]
#[error("history store operation failed: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Durable recording surface for synthesized history.
///
/// Operations are synchronous and blocking: the underlying storage
/// only permits one current timeline at a time, so there is nothing
/// to parallelize.
pub trait HistoryStore {
    /// Create the empty root timeline with one placeholder change
    /// stamped at `at`.
    fn init_root(&mut self, at: DateTime<Utc>) -> Result<(), StoreError>;

    /// Create a new timeline named `name` branching from `base`.
    fn create_timeline(&mut self, name: &str, base: &str) -> Result<(), StoreError>;

    /// Point the current-timeline pointer at `name`.
    fn switch_timeline(&mut self, name: &str) -> Result<(), StoreError>;

    /// Append a change to the current timeline, stamped with
    /// `authored_at`.
    fn record_change(&mut self, message: &str, authored_at: DateTime<Utc>)
    -> Result<(), StoreError>;

    /// Merge every named timeline into the current one, preserving
    /// all lineages. Timelines are disjoint by construction, so no
    /// true conflicts arise.
    fn merge_timelines(&mut self, names: &[String]) -> Result<(), StoreError>;
}
