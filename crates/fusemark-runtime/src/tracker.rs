//! [`VisibilityTracker`] – found/lost bookkeeping for the two anchors.
//!
//! Holds one boolean per anchor, mutated only by found/lost events from the
//! external tracker. The combined [`VisibilityState`] is never stored: it is
//! derived on demand from the two flags, so there is no transition table to
//! keep consistent and no flag-reset path to forget.

use fusemark_types::{AnchorId, TrackingEvent, TrackingEventKind, VisibilityState};

/// Tracks which of the two anchors currently has tracking lock.
///
/// # Example
///
/// ```
/// use fusemark_runtime::tracker::VisibilityTracker;
/// use fusemark_types::{AnchorId, VisibilityState};
///
/// let mut tracker = VisibilityTracker::new();
/// assert_eq!(tracker.state(), VisibilityState::Neither);
///
/// tracker.set_found(AnchorId::A);
/// tracker.set_found(AnchorId::B);
/// assert_eq!(tracker.state(), VisibilityState::Both);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibilityTracker {
    found_a: bool,
    found_b: bool,
}

impl VisibilityTracker {
    /// Both anchors start untracked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the tracker gained lock on `anchor`. Idempotent.
    pub fn set_found(&mut self, anchor: AnchorId) {
        *self.flag_mut(anchor) = true;
    }

    /// Record that the tracker lost lock on `anchor`. Idempotent.
    pub fn set_lost(&mut self, anchor: AnchorId) {
        *self.flag_mut(anchor) = false;
    }

    /// Apply a found/lost event to the corresponding flag.
    pub fn apply(&mut self, event: &TrackingEvent) {
        match event.kind {
            TrackingEventKind::Found => self.set_found(event.anchor),
            TrackingEventKind::Lost => self.set_lost(event.anchor),
        }
    }

    /// Whether `anchor` currently has tracking lock.
    pub fn is_found(&self, anchor: AnchorId) -> bool {
        match anchor {
            AnchorId::A => self.found_a,
            AnchorId::B => self.found_b,
        }
    }

    /// The combined visibility, derived from the current flags.
    pub fn state(&self) -> VisibilityState {
        VisibilityState::from_flags(self.found_a, self.found_b)
    }

    fn flag_mut(&mut self, anchor: AnchorId) -> &mut bool {
        match anchor {
            AnchorId::A => &mut self.found_a,
            AnchorId::B => &mut self.found_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(anchor: AnchorId, kind: TrackingEventKind) -> TrackingEvent {
        TrackingEvent::new("test", anchor, kind)
    }

    #[test]
    fn initial_state_is_neither() {
        let tracker = VisibilityTracker::new();
        assert_eq!(tracker.state(), VisibilityState::Neither);
        assert!(!tracker.is_found(AnchorId::A));
        assert!(!tracker.is_found(AnchorId::B));
    }

    #[test]
    fn single_anchor_states() {
        let mut tracker = VisibilityTracker::new();
        tracker.set_found(AnchorId::A);
        assert_eq!(tracker.state(), VisibilityState::OnlyA);

        let mut tracker = VisibilityTracker::new();
        tracker.set_found(AnchorId::B);
        assert_eq!(tracker.state(), VisibilityState::OnlyB);
    }

    #[test]
    fn both_then_losing_one_leaves_the_other() {
        let mut tracker = VisibilityTracker::new();
        tracker.set_found(AnchorId::A);
        tracker.set_found(AnchorId::B);
        assert_eq!(tracker.state(), VisibilityState::Both);

        tracker.set_lost(AnchorId::A);
        assert_eq!(tracker.state(), VisibilityState::OnlyB);

        tracker.set_lost(AnchorId::B);
        assert_eq!(tracker.state(), VisibilityState::Neither);
    }

    #[test]
    fn found_is_idempotent() {
        let mut tracker = VisibilityTracker::new();
        tracker.set_found(AnchorId::A);
        let once = tracker.state();
        tracker.set_found(AnchorId::A);
        assert_eq!(tracker.state(), once);
    }

    #[test]
    fn lost_is_idempotent_from_startup() {
        // A lost event for an anchor that was never found is a no-op.
        let mut tracker = VisibilityTracker::new();
        tracker.set_lost(AnchorId::B);
        assert_eq!(tracker.state(), VisibilityState::Neither);
    }

    #[test]
    fn state_depends_only_on_latest_flags_not_event_order() {
        // Reaching Both via A-then-B equals reaching it via B-then-A.
        let mut ab = VisibilityTracker::new();
        ab.set_found(AnchorId::A);
        ab.set_found(AnchorId::B);

        let mut ba = VisibilityTracker::new();
        ba.set_found(AnchorId::B);
        ba.set_found(AnchorId::A);

        assert_eq!(ab.state(), ba.state());
    }

    #[test]
    fn apply_routes_events_to_flags() {
        let mut tracker = VisibilityTracker::new();
        tracker.apply(&event(AnchorId::A, TrackingEventKind::Found));
        assert_eq!(tracker.state(), VisibilityState::OnlyA);
        tracker.apply(&event(AnchorId::A, TrackingEventKind::Lost));
        assert_eq!(tracker.state(), VisibilityState::Neither);
    }

    #[test]
    fn long_event_sequence_stays_consistent() {
        let mut tracker = VisibilityTracker::new();
        let script = [
            (AnchorId::A, TrackingEventKind::Found, VisibilityState::OnlyA),
            (AnchorId::A, TrackingEventKind::Found, VisibilityState::OnlyA),
            (AnchorId::B, TrackingEventKind::Found, VisibilityState::Both),
            (AnchorId::A, TrackingEventKind::Lost, VisibilityState::OnlyB),
            (AnchorId::A, TrackingEventKind::Lost, VisibilityState::OnlyB),
            (AnchorId::A, TrackingEventKind::Found, VisibilityState::Both),
            (AnchorId::B, TrackingEventKind::Lost, VisibilityState::OnlyA),
            (AnchorId::A, TrackingEventKind::Lost, VisibilityState::Neither),
        ];
        for (anchor, kind, expected) in script {
            tracker.apply(&event(anchor, kind));
            assert_eq!(tracker.state(), expected, "after {kind:?} for {anchor}");
        }
    }
}
