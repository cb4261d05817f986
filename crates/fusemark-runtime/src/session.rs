//! [`FusionSession`] – the event-and-frame orchestrator.
//!
//! Owns the [`VisibilityTracker`] and [`PresentationDriver`] and drives them
//! from two entry points, both called on the same logical thread:
//!
//! 1. [`handle_event`][FusionSession::handle_event] – serialized found/lost
//!    callbacks from the external tracker. Updates the flags and, when the
//!    derived state changed, reapplies the presentation.
//! 2. [`tick`][FusionSession::tick] – once per rendered frame. While both
//!    anchors are visible, fuses their current world poses and writes the
//!    result to the merged content node. Every other state is a no-op.
//!
//! The fused transform is recomputed from scratch on every tick; nothing is
//! smoothed or carried across frames except the last value written to the
//! sink. The [`PoseSource`] must hand back hierarchy-flushed poses for the
//! current frame.
//!
//! # Example
//!
//! ```rust
//! use fusemark_runtime::session::FusionSession;
//! use fusemark_scene::sim::{FixedPoses, SimContent, SimStatus};
//! use fusemark_types::{AnchorId, TrackingEvent, TrackingEventKind, VisibilityState};
//!
//! let mut session = FusionSession::new(SimContent::new(), SimStatus::new());
//! session.handle_event(&TrackingEvent::new("doc", AnchorId::A, TrackingEventKind::Found));
//! assert_eq!(session.state(), VisibilityState::OnlyA);
//!
//! session.tick(&FixedPoses::new()); // no-op until both anchors are visible
//! ```

use fusemark_perception::fusion::fuse;
use fusemark_scene::presentation::{AnchorLabels, PresentationDriver};
use fusemark_scene::sink::{ContentSink, PoseSource, StatusSink};
use fusemark_types::{AnchorId, TrackingEvent, VisibilityState};
use tracing::info;

use crate::tracker::VisibilityTracker;

/// Orchestrates tracking events, presentation, and per-frame pose fusion.
pub struct FusionSession<C: ContentSink, S: StatusSink> {
    tracker: VisibilityTracker,
    driver: PresentationDriver,
    content: C,
    status: S,
}

impl<C: ContentSink, S: StatusSink> FusionSession<C, S> {
    /// Build a session around the given sinks, with default anchor labels.
    ///
    /// The initial presentation (everything hidden, "Scanning...") is applied
    /// immediately so the scene starts consistent with the `Neither` state.
    pub fn new(content: C, status: S) -> Self {
        Self::with_labels(content, status, AnchorLabels::default())
    }

    /// Build a session with custom anchor display labels.
    pub fn with_labels(content: C, status: S, labels: AnchorLabels) -> Self {
        let mut session = Self {
            tracker: VisibilityTracker::new(),
            driver: PresentationDriver::new(labels),
            content,
            status,
        };
        session
            .driver
            .apply(session.tracker.state(), &mut session.content, &mut session.status);
        session
    }

    /// The current derived visibility state.
    pub fn state(&self) -> VisibilityState {
        self.tracker.state()
    }

    /// Feed one found/lost event into the session.
    ///
    /// The presentation is reapplied only when the derived state actually
    /// changed; repeated found events for an already-tracked anchor fall
    /// through to the driver's redundancy check and do nothing.
    pub fn handle_event(&mut self, event: &TrackingEvent) {
        let before = self.tracker.state();
        self.tracker.apply(event);
        let after = self.tracker.state();

        if before != after {
            info!(?before, ?after, anchor = %event.anchor, kind = ?event.kind, "visibility changed");
        }
        self.driver.apply(after, &mut self.content, &mut self.status);
    }

    /// Advance one rendered frame.
    ///
    /// While both anchors are visible, reads their current world poses from
    /// `poses` and writes the fused transform to the merged content node.
    /// In every other state the frame is a no-op.
    pub fn tick(&mut self, poses: &impl PoseSource) {
        if self.tracker.state() != VisibilityState::Both {
            return;
        }
        let fused = fuse(
            &poses.world_transform(AnchorId::A),
            &poses.world_transform(AnchorId::B),
        );
        self.content.set_merged_transform(fused);
    }

    /// Shared access to the content sink, for hosts that render from it.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Shared access to the status sink.
    pub fn status(&self) -> &S {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusemark_perception::transform::{Quaternion, Vec3, WorldTransform};
    use fusemark_scene::sim::{FixedPoses, SimContent, SimStatus};
    use fusemark_scene::sink::ContentNode;
    use fusemark_types::{StatusSeverity, TrackingEventKind};

    fn event(anchor: AnchorId, kind: TrackingEventKind) -> TrackingEvent {
        TrackingEvent::new("test", anchor, kind)
    }

    fn session() -> FusionSession<SimContent, SimStatus> {
        FusionSession::new(SimContent::new(), SimStatus::new())
    }

    fn poses_at(ax: f32, bx: f32) -> FixedPoses {
        let mut poses = FixedPoses::new();
        poses.set(
            AnchorId::A,
            WorldTransform::new(Vec3::new(ax, 0.0, 0.0), Vec3::splat(1.0), Quaternion::identity()),
        );
        poses.set(
            AnchorId::B,
            WorldTransform::new(Vec3::new(bx, 0.0, 0.0), Vec3::splat(1.0), Quaternion::identity()),
        );
        poses
    }

    #[test]
    fn starts_scanning_with_everything_hidden() {
        let session = session();
        assert_eq!(session.state(), VisibilityState::Neither);
        assert!(!session.content().is_visible(ContentNode::AnchorA));
        assert!(!session.content().is_visible(ContentNode::Merged));
        assert_eq!(
            session.status().current(),
            Some(("Scanning...".to_string(), StatusSeverity::Pending))
        );
    }

    #[test]
    fn tick_outside_both_writes_nothing() {
        let mut session = session();
        session.tick(&poses_at(0.0, 2.0));
        assert_eq!(session.content().merged_write_count(), 0);

        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        session.tick(&poses_at(0.0, 2.0));
        assert_eq!(session.content().merged_write_count(), 0);
    }

    #[test]
    fn tick_in_both_writes_midpoint_transform() {
        let mut session = session();
        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        session.handle_event(&event(AnchorId::B, TrackingEventKind::Found));

        session.tick(&poses_at(0.0, 2.0));
        let fused = session.content().merged_transform().unwrap();
        assert!((fused.position.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn fused_transform_follows_moving_anchors_each_tick() {
        let mut session = session();
        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        session.handle_event(&event(AnchorId::B, TrackingEventKind::Found));

        session.tick(&poses_at(0.0, 2.0));
        assert!((session.content().merged_transform().unwrap().position.x - 1.0).abs() < 1e-5);

        // The anchors moved; the next tick recomputes from scratch.
        session.tick(&poses_at(4.0, 6.0));
        assert!((session.content().merged_transform().unwrap().position.x - 5.0).abs() < 1e-5);
        assert_eq!(session.content().merged_write_count(), 2);
    }

    #[test]
    fn end_to_end_two_card_scenario() {
        let mut session = session();

        // Anchor A enters.
        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        assert_eq!(session.state(), VisibilityState::OnlyA);
        assert!(session.content().is_visible(ContentNode::AnchorA));
        assert!(!session.content().is_visible(ContentNode::Merged));
        assert_eq!(
            session.status().current(),
            Some(("Anchor A detected.".to_string(), StatusSeverity::Info))
        );

        // Anchor B joins: merged content at the midpoint.
        session.handle_event(&event(AnchorId::B, TrackingEventKind::Found));
        assert_eq!(session.state(), VisibilityState::Both);
        assert!(session.content().is_visible(ContentNode::Merged));
        assert!(!session.content().is_visible(ContentNode::AnchorA));
        assert!(!session.content().is_visible(ContentNode::AnchorB));

        session.tick(&poses_at(-1.0, 1.0));
        let fused = session.content().merged_transform().unwrap();
        assert!(fused.position.x.abs() < 1e-5);

        // Anchor A drops out.
        session.handle_event(&event(AnchorId::A, TrackingEventKind::Lost));
        assert_eq!(session.state(), VisibilityState::OnlyB);
        assert!(session.content().is_visible(ContentNode::AnchorB));
        assert!(!session.content().is_visible(ContentNode::Merged));
    }

    #[test]
    fn redundant_found_events_do_not_rewrite_the_scene() {
        let mut session = session();
        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        let writes = session.content().write_count();

        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        assert_eq!(session.state(), VisibilityState::OnlyA);
        assert_eq!(session.content().write_count(), writes);
    }

    #[test]
    fn custom_labels_flow_into_status() {
        let mut session = FusionSession::with_labels(
            SimContent::new(),
            SimStatus::new(),
            AnchorLabels::new("Worker card", "Station card"),
        );
        session.handle_event(&event(AnchorId::B, TrackingEventKind::Found));
        assert_eq!(
            session.status().current(),
            Some(("Station card detected.".to_string(), StatusSeverity::Info))
        );
    }

    #[test]
    fn scale_of_anchor_a_survives_fusion() {
        let mut session = session();
        session.handle_event(&event(AnchorId::A, TrackingEventKind::Found));
        session.handle_event(&event(AnchorId::B, TrackingEventKind::Found));

        let mut poses = FixedPoses::new();
        poses.set(
            AnchorId::A,
            WorldTransform::new(Vec3::zero(), Vec3::splat(2.0), Quaternion::identity()),
        );
        poses.set(
            AnchorId::B,
            WorldTransform::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(4.0), Quaternion::identity()),
        );
        session.tick(&poses);

        let fused = session.content().merged_transform().unwrap();
        assert!((fused.scale.x - 2.0).abs() < 1e-5);
    }
}
