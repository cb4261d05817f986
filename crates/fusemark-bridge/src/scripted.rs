//! Deterministic scripted tracking feed.
//!
//! Replays a fixed sequence of found/lost events keyed by frame tick, in
//! place of a camera-driven marker tracker. Used by the demo binary and by
//! headless integration tests; the analog of pointing the real tracker at a
//! pair of printed cards and moving them in and out of view.
//!
//! # Example
//!
//! ```rust
//! use fusemark_bridge::scripted::ScriptedFeed;
//! use fusemark_types::{AnchorId, TrackingEventKind};
//!
//! let feed = ScriptedFeed::new()
//!     .at(10, AnchorId::A, TrackingEventKind::Found)
//!     .at(25, AnchorId::B, TrackingEventKind::Found);
//!
//! assert!(feed.events_at(9).is_empty());
//! assert_eq!(feed.events_at(10).len(), 1);
//! ```

use fusemark_types::{AnchorId, TrackingEvent, TrackingEventKind};

/// Source string stamped on every scripted event.
const SOURCE: &str = "fusemark-bridge::scripted";

/// One scripted found/lost step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStep {
    /// Frame tick at which the event fires.
    pub at_tick: u64,
    pub anchor: AnchorId,
    pub kind: TrackingEventKind,
}

/// A tick-indexed script of tracking events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFeed {
    steps: Vec<FeedStep>,
}

impl ScriptedFeed {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step firing at `at_tick`. Steps may be registered out of
    /// order; replay only depends on each step's own tick.
    pub fn at(mut self, at_tick: u64, anchor: AnchorId, kind: TrackingEventKind) -> Self {
        self.steps.push(FeedStep {
            at_tick,
            anchor,
            kind,
        });
        self
    }

    /// The scripted demo session: anchor A enters, anchor B joins, A drops
    /// out, then B is lost too.
    pub fn two_card_demo() -> Self {
        Self::new()
            .at(10, AnchorId::A, TrackingEventKind::Found)
            .at(30, AnchorId::B, TrackingEventKind::Found)
            .at(60, AnchorId::A, TrackingEventKind::Lost)
            .at(80, AnchorId::B, TrackingEventKind::Lost)
    }

    /// The tick of the last step, or 0 for an empty script.
    pub fn last_tick(&self) -> u64 {
        self.steps.iter().map(|s| s.at_tick).max().unwrap_or(0)
    }

    /// Materialize the events scheduled for `tick`, in registration order.
    pub fn events_at(&self, tick: u64) -> Vec<TrackingEvent> {
        self.steps
            .iter()
            .filter(|s| s.at_tick == tick)
            .map(|s| TrackingEvent::new(SOURCE, s.anchor, s.kind))
            .collect()
    }
}
