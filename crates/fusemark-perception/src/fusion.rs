//! Pose Fusion.
//!
//! Blends the two anchors' world transforms into the single pose that the
//! merged content node is placed at while both anchors are tracked:
//!
//! - **Position** – arithmetic midpoint of the two world positions:
//!   `mid = (pos_a + pos_b) * 0.5`.
//! - **Scale** – anchor A's world scale, copied verbatim. The two markers are
//!   printed at the same physical size, so one anchor's tracked scale is the
//!   scale of the pair; B's is ignored, not averaged.
//! - **Rotation** – shortest-arc slerp at `t = 0.5`, the orientation exactly
//!   halfway along the great-circle arc between the two anchor rotations.
//!
//! The blend is stateless: it is recomputed from scratch every frame while
//! both anchors are visible, with no smoothing or damping carried across
//! frames. Callers own the cadence (once per rendered frame) and the
//! precondition that both input poses are hierarchy-flushed for the current
//! frame.
//!
//! # Example
//!
//! ```rust
//! use fusemark_perception::fusion::fuse;
//! use fusemark_perception::transform::{Quaternion, Vec3, WorldTransform};
//!
//! let a = WorldTransform::new(Vec3::zero(), Vec3::splat(2.0), Quaternion::identity());
//! let b = WorldTransform::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(4.0), Quaternion::identity());
//!
//! let fused = fuse(&a, &b);
//! assert!((fused.position.x - 1.0).abs() < 1e-5);
//! assert!((fused.scale.x - 2.0).abs() < 1e-5); // A's scale, not the average
//! ```

use tracing::trace;

use crate::transform::WorldTransform;

/// Blend two anchor world poses into the merged-content pose.
///
/// Meaningful only while both anchors are tracked; with a stale input the
/// result is simply a blend of stale poses (never unsafe, never an error).
/// Input rotations are assumed to be unit quaternions and are not validated.
pub fn fuse(anchor_a: &WorldTransform, anchor_b: &WorldTransform) -> WorldTransform {
    let fused = WorldTransform::new(
        anchor_a.position.midpoint(anchor_b.position),
        anchor_a.scale,
        anchor_a.rotation.slerp(anchor_b.rotation, 0.5),
    );

    trace!(
        x = fused.position.x,
        y = fused.position.y,
        z = fused.position.z,
        "fused anchor poses"
    );

    fused
}
