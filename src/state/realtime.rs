//! Realtime Feed
//!
//! Presence and activity updates delivered to the page. The transport sits
//! behind a trait so call sites do not care whether updates come from a
//! genuine channel or the shipped simulation.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;

/// A presence sample: how many users are currently online
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceUpdate {
    pub online: u32,
    pub observed_at: DateTime<Utc>,
}

/// Something happened in the subscriber's network
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub message: String,
    pub observed_at: DateTime<Utc>,
}

/// Callbacks a subscriber hands to the feed
pub struct FeedSink {
    pub on_presence: Box<dyn Fn(PresenceUpdate)>,
    pub on_activity: Box<dyn Fn(ActivityEvent)>,
}

/// Source of presence and activity updates.
///
/// Implementations own their transport; subscribers only see the sink
/// callbacks firing. The shipped [`SimulatedFeed`] is a placeholder with no
/// backend correlate; a push channel plugs in behind this trait without
/// touching call sites.
pub trait RealtimeFeed {
    /// Start delivering updates to `sink`. Delivery stops when the returned
    /// handle is dropped.
    fn subscribe(&self, sink: FeedSink) -> FeedHandle;
}

/// Keeps a subscription alive.
///
/// Dropping the handle stops delivery and releases whatever resource the
/// feed holds behind it.
pub struct FeedHandle {
    _task: Box<dyn std::any::Any>,
}

impl FeedHandle {
    /// Wrap the resource that keeps a subscription running
    pub fn new(task: impl std::any::Any) -> Self {
        Self {
            _task: Box::new(task),
        }
    }

    /// Keep the subscription running for the lifetime of the page
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Simulated feed: emits a random presence sample every tick and raises an
/// activity event on a random subset of ticks.
pub struct SimulatedFeed {
    tick_ms: u32,
}

impl SimulatedFeed {
    pub fn new(tick_ms: u32) -> Self {
        Self { tick_ms }
    }
}

impl RealtimeFeed for SimulatedFeed {
    fn subscribe(&self, sink: FeedSink) -> FeedHandle {
        let interval = Interval::new(self.tick_ms, move || {
            let online = scale_online_count(js_sys::Math::random());
            (sink.on_presence)(PresenceUpdate {
                online,
                observed_at: Utc::now(),
            });

            if should_raise_activity(js_sys::Math::random()) {
                (sink.on_activity)(ActivityEvent {
                    message: "New activity in your network!".to_string(),
                    observed_at: Utc::now(),
                });
            }
        });

        FeedHandle::new(interval)
    }
}

/// Map a uniform sample in `[0, 1)` to an online count in `1..=50`
pub fn scale_online_count(sample: f64) -> u32 {
    (sample * 50.0) as u32 + 1
}

/// Whether a uniform sample in `[0, 1)` should raise an activity event
pub fn should_raise_activity(sample: f64) -> bool {
    sample > 0.7
}
