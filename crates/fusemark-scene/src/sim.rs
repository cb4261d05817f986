//! In-process simulated scene for headless tests and demos.
//!
//! [`SimContent`] and [`SimStatus`] are recording stubs for the two output
//! sinks, and [`FixedPoses`] is a [`PoseSource`] backed by a plain map. They
//! let the full fusion stack run without any renderer or camera attached.
//!
//! # Example
//!
//! ```rust
//! use fusemark_scene::sim::{SimContent, SimStatus};
//! use fusemark_scene::presentation::PresentationDriver;
//! use fusemark_scene::sink::ContentNode;
//! use fusemark_types::VisibilityState;
//!
//! let mut content = SimContent::new();
//! let mut status = SimStatus::new();
//! let mut driver = PresentationDriver::default();
//!
//! driver.apply(VisibilityState::OnlyA, &mut content, &mut status);
//! assert!(content.is_visible(ContentNode::AnchorA));
//! ```

use std::collections::HashMap;

use fusemark_perception::transform::WorldTransform;
use fusemark_types::{AnchorId, StatusSeverity};

use crate::sink::{ContentNode, ContentSink, PoseSource, StatusSink};

// ────────────────────────────────────────────────────────────────────────────
// SimContent
// ────────────────────────────────────────────────────────────────────────────

/// A simulated content layer that records visibility toggles and the most
/// recent merged-transform write.
#[derive(Debug, Default)]
pub struct SimContent {
    visible: HashMap<ContentNode, bool>,
    merged_transform: Option<WorldTransform>,
    merged_writes: usize,
    writes: usize,
}

impl SimContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `node` is currently shown. Nodes never written to are hidden.
    pub fn is_visible(&self, node: ContentNode) -> bool {
        self.visible.get(&node).copied().unwrap_or(false)
    }

    /// The last transform written to the merged node, if any.
    pub fn merged_transform(&self) -> Option<WorldTransform> {
        self.merged_transform
    }

    /// How many transform writes the merged node has received.
    pub fn merged_write_count(&self) -> usize {
        self.merged_writes
    }

    /// Total number of visibility writes received.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ContentSink for SimContent {
    fn set_content_visible(&mut self, node: ContentNode, visible: bool) {
        self.writes += 1;
        self.visible.insert(node, visible);
    }

    fn set_merged_transform(&mut self, transform: WorldTransform) {
        self.merged_writes += 1;
        self.merged_transform = Some(transform);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SimStatus
// ────────────────────────────────────────────────────────────────────────────

/// A simulated status pill that records the current line, every line ever
/// set, and the visibility of the two auxiliary actions.
#[derive(Debug, Default)]
pub struct SimStatus {
    current: Option<(String, StatusSeverity)>,
    history: Vec<(String, StatusSeverity)>,
    actions: HashMap<AnchorId, bool>,
    writes: usize,
}

impl SimStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently set status line.
    pub fn current(&self) -> Option<(String, StatusSeverity)> {
        self.current.clone()
    }

    /// Every status line set so far, oldest first.
    pub fn history(&self) -> &[(String, StatusSeverity)] {
        &self.history
    }

    /// Whether the auxiliary action for `anchor` is currently offered.
    pub fn action_visible(&self, anchor: AnchorId) -> bool {
        self.actions.get(&anchor).copied().unwrap_or(false)
    }

    /// Total number of status/action writes received.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StatusSink for SimStatus {
    fn set_status(&mut self, text: &str, severity: StatusSeverity) {
        self.writes += 1;
        self.current = Some((text.to_string(), severity));
        self.history.push((text.to_string(), severity));
    }

    fn set_action_visible(&mut self, anchor: AnchorId, visible: bool) {
        self.writes += 1;
        self.actions.insert(anchor, visible);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FixedPoses
// ────────────────────────────────────────────────────────────────────────────

/// A [`PoseSource`] backed by a plain per-anchor map.
///
/// Poses are whatever was last [`set`][FixedPoses::set]; unset anchors report
/// the identity transform. Stands in for the tracking system's per-frame
/// world-pose accessor.
#[derive(Debug, Default)]
pub struct FixedPoses {
    poses: HashMap<AnchorId, WorldTransform>,
}

impl FixedPoses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the world pose reported for `anchor`.
    pub fn set(&mut self, anchor: AnchorId, pose: WorldTransform) {
        self.poses.insert(anchor, pose);
    }
}

impl PoseSource for FixedPoses {
    fn world_transform(&self, anchor: AnchorId) -> WorldTransform {
        self.poses
            .get(&anchor)
            .copied()
            .unwrap_or_else(WorldTransform::identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusemark_perception::transform::{Quaternion, Vec3};

    #[test]
    fn unwritten_nodes_are_hidden() {
        let content = SimContent::new();
        assert!(!content.is_visible(ContentNode::AnchorA));
        assert!(!content.is_visible(ContentNode::Merged));
        assert_eq!(content.merged_transform(), None);
    }

    #[test]
    fn visibility_writes_are_recorded() {
        let mut content = SimContent::new();
        content.set_content_visible(ContentNode::AnchorB, true);
        assert!(content.is_visible(ContentNode::AnchorB));
        content.set_content_visible(ContentNode::AnchorB, false);
        assert!(!content.is_visible(ContentNode::AnchorB));
        assert_eq!(content.write_count(), 2);
    }

    #[test]
    fn merged_transform_overwrites() {
        let mut content = SimContent::new();
        let t1 = WorldTransform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(1.0), Quaternion::identity());
        let t2 = WorldTransform::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(1.0), Quaternion::identity());
        content.set_merged_transform(t1);
        content.set_merged_transform(t2);

        assert_eq!(content.merged_write_count(), 2);
        assert!((content.merged_transform().unwrap().position.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn status_history_accumulates() {
        let mut status = SimStatus::new();
        status.set_status("Scanning...", StatusSeverity::Pending);
        status.set_status("Anchor A detected.", StatusSeverity::Info);

        assert_eq!(status.history().len(), 2);
        assert_eq!(
            status.current(),
            Some(("Anchor A detected.".to_string(), StatusSeverity::Info))
        );
    }

    #[test]
    fn actions_default_hidden() {
        let status = SimStatus::new();
        assert!(!status.action_visible(AnchorId::A));
        assert!(!status.action_visible(AnchorId::B));
    }

    #[test]
    fn fixed_poses_fall_back_to_identity() {
        let mut poses = FixedPoses::new();
        poses.set(
            AnchorId::A,
            WorldTransform::new(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(1.0), Quaternion::identity()),
        );

        assert!((poses.world_transform(AnchorId::A).position.x - 3.0).abs() < 1e-5);
        assert_eq!(poses.world_transform(AnchorId::B), WorldTransform::identity());
    }
}
