//! # Histloom Synthesis Core
//!
//! Converts an ordered sequence of push events into a synthetic
//! version-controlled history: one timeline per origin project,
//! bounded by a cap, reconciled at the end into a single composite
//! timeline that keeps every contributing lineage.
//!
//! ## Architecture
//!
//! ```text
//! Vec<PushEvent>        ← time-ordered feed (histloom-feed)
//!     │
//! AllocatorState        ← which timeline, create vs. continue, cap
//!     │
//! replay_event          ← sub-changes become timestamped changes
//!     │
//! reconcile             ← one multi-parent merge into the root
//!     │
//! HistoryStore          ← durable recording boundary (histloom-git)
//! ```
//!
//! The core never invokes a version-control tool itself; it only
//! drives the five operations of [`HistoryStore`].

pub mod allocator;
pub mod pipeline;
pub mod reconciler;
pub mod replayer;
pub mod store;

pub use allocator::{AllocatorState, Assignment, DEFAULT_MAX_TIMELINES, timeline_name};
pub use pipeline::{Summary, SynthError, synthesize};
pub use reconciler::reconcile;
pub use replayer::{PLACEHOLDER_MESSAGE, replay_event};
pub use store::{HistoryStore, ROOT_TIMELINE, StoreError};
