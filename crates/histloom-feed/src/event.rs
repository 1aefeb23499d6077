//! Typed push events and feed parsing.
//!
//! The feed is a JSON array of heterogeneous event objects; only
//! push-style events survive parsing. The retained events are sorted
//! ascending by `created_at` once, here, and nothing later re-sorts.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Event kind retained by the feed filter; every other kind is dropped.
pub const PUSH_EVENT_KIND: &str = "PushEvent";

/// Errors from retrieving or interpreting the event feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(String),

    #[error("feed endpoint returned HTTP {code}")]
    Status { code: u16 },

    #[error("feed body is not a valid event listing: {0}")]
    Malformed(String),

    #[error("feed contained no push events")]
    EmptyHistory,
}

/// One commit carried inside a push event's payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRecord {
    pub message: String,
}

/// A single push observed in the subject's public activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushEvent {
    /// Full origin project path, e.g. `owner/repo`.
    pub repo: String,
    pub created_at: DateTime<Utc>,
    /// Commits contained in the push; may be empty.
    pub commits: Vec<CommitRecord>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    repo: RawRepo,
    created_at: DateTime<Utc>,
    #[serde(default)]
    payload: RawPayload,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawPayload {
    #[serde(default)]
    commits: Vec<CommitRecord>,
}

/// Parse the raw feed body into push events, sorted ascending by time.
///
/// The sort is stable, so events sharing a timestamp keep their feed
/// order. Fails with [`FeedError::EmptyHistory`] when no push events
/// remain after filtering: an empty synthetic history downstream is
/// indistinguishable from a tooling failure, so it is a hard stop.
pub fn parse_feed(body: &str) -> Result<Vec<PushEvent>, FeedError> {
    let raw: Vec<RawEvent> =
        serde_json::from_str(body).map_err(|e| FeedError::Malformed(e.to_string()))?;

    let mut events: Vec<PushEvent> = raw
        .into_iter()
        .filter(|event| event.kind == PUSH_EVENT_KIND)
        .map(|event| PushEvent {
            repo: event.repo.name,
            created_at: event.created_at,
            commits: event.payload.commits,
        })
        .collect();

    events.sort_by_key(|event| event.created_at);

    if events.is_empty() {
        return Err(FeedError::EmptyHistory);
    }

    tracing::debug!(count = events.len(), "push events retained from feed");
    Ok(events)
}
