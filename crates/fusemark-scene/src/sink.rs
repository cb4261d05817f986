//! Boundary traits between the fusion core and the hosting scene.
//!
//! Implementations wrap whatever actually renders: a scene graph, a WebXR
//! overlay, or the in-memory stubs in [`sim`][crate::sim]. The core receives
//! explicit handles to these traits instead of looking nodes up in a global
//! registry.

use fusemark_perception::transform::WorldTransform;
use fusemark_types::{AnchorId, StatusSeverity};

/// The three content nodes the presentation toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentNode {
    /// Content attached to anchor A.
    AnchorA,
    /// Content attached to anchor B.
    AnchorB,
    /// The merged content shown when both anchors are tracked.
    Merged,
}

impl ContentNode {
    /// The node carrying a single anchor's content.
    pub fn for_anchor(anchor: AnchorId) -> Self {
        match anchor {
            AnchorId::A => ContentNode::AnchorA,
            AnchorId::B => ContentNode::AnchorB,
        }
    }
}

/// Visibility and transform writes to the scene's content nodes.
pub trait ContentSink: Send + Sync {
    /// Show or hide one of the three content nodes.
    fn set_content_visible(&mut self, node: ContentNode, visible: bool);

    /// Write the fused world transform to the merged content node.
    ///
    /// Called once per rendered frame while both anchors are tracked; the
    /// sink should overwrite, not accumulate.
    fn set_merged_transform(&mut self, transform: WorldTransform);
}

/// Status-pill text and the two auxiliary action affordances.
pub trait StatusSink: Send + Sync {
    /// Replace the status line. `severity` carries the color the hosting UI
    /// renders it with.
    fn set_status(&mut self, text: &str, severity: StatusSeverity);

    /// Show or hide the auxiliary action offered while `anchor` is the only
    /// one visible.
    fn set_action_visible(&mut self, anchor: AnchorId, visible: bool);
}

/// Read access to the anchors' current world poses.
///
/// Owned and updated by the external tracking system. Implementations must
/// return poses that are hierarchy-flushed for the current frame; a pending
/// parent update surfaces as a one-frame-lagged fused pose that this crate
/// cannot detect.
pub trait PoseSource {
    fn world_transform(&self, anchor: AnchorId) -> WorldTransform;
}
