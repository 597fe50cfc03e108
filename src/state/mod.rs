//! State Management
//!
//! Shared controller state and the realtime feed.

pub mod global;
pub mod realtime;

pub use global::{BusySet, ControlId, ControllerState};
pub use realtime::{
    ActivityEvent, FeedHandle, FeedSink, PresenceUpdate, RealtimeFeed, SimulatedFeed,
};
