//! Activity feed boundary.
//!
//! Turns the raw public-events JSON of one subject into a typed,
//! time-ordered sequence of push events. Everything downstream of this
//! crate works on [`PushEvent`] values and never sees the wire format.

pub mod client;
pub mod event;

pub use client::FeedClient;
pub use event::{CommitRecord, FeedError, PushEvent, parse_feed};
