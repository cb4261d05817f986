//! World-space transform primitives.
//!
//! An anchor's pose arrives from the external tracking system as a world
//! transform: position, per-axis scale, and a unit-quaternion rotation.
//! This module provides the small amount of vector/quaternion algebra the
//! fusion step needs, including shortest-arc spherical interpolation.
//!
//! # Example
//!
//! ```rust
//! use fusemark_perception::transform::{Quaternion, Vec3};
//!
//! let a = Vec3::new(0.0, 0.0, 0.0);
//! let b = Vec3::new(2.0, 0.0, 0.0);
//! assert!((a.midpoint(b).x - 1.0).abs() < 1e-5);
//!
//! let half = Quaternion::identity()
//!     .slerp(Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), std::f32::consts::PI), 0.5);
//! // Half of a 180° yaw is a 90° yaw.
//! assert!((half.angle_to(Quaternion::identity()) - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
//! ```

// ────────────────────────────────────────────────────────────────────────────
// Vec3
// ────────────────────────────────────────────────────────────────────────────

/// A 3-D vector, used for both positions and per-axis scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// A vector with all three components set to `v` (uniform scale).
    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    /// Multiply every component by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// The point halfway between `self` and `rhs`: `(self + rhs) * 0.5`.
    pub fn midpoint(self, rhs: Self) -> Self {
        self.add(rhs).scale(0.5)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// A unit-length copy of this vector. Returns the zero vector unchanged.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self.scale(1.0 / len) } else { self }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Quaternion
// ────────────────────────────────────────────────────────────────────────────

/// A unit quaternion representing a 3-D rotation (w, x, y, z convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Dot-product threshold above which two rotations are treated as nearly
/// parallel and slerp degrades to a normalized lerp.
const SLERP_PARALLEL_THRESHOLD: f32 = 0.9995;

impl Quaternion {
    /// Create a quaternion.  The caller is responsible for providing a unit
    /// quaternion (|q| = 1); non-unit input is never validated here.
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation (no rotation).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle_rad` radians about `axis` (normalized internally).
    pub fn from_axis_angle(axis: Vec3, angle_rad: f32) -> Self {
        let axis = axis.normalize();
        let half = angle_rad * 0.5;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    /// Four-component dot product. Negative means the two quaternions sit on
    /// opposite sides of the double cover.
    pub fn dot(self, rhs: Self) -> f32 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Sign-flipped copy. Represents the same rotation as `self`.
    pub fn negate(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }

    /// Rescale to unit length. The identity is returned for a zero quaternion.
    pub fn normalize(self) -> Self {
        let len = self.dot(self).sqrt();
        if len > 0.0 {
            Self::new(self.w / len, self.x / len, self.y / len, self.z / len)
        } else {
            Self::identity()
        }
    }

    /// Hamilton product: compose two rotations.
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }

    /// Conjugate (== inverse for a unit quaternion).
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotate a vector by this quaternion: p' = q * p * q*.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let p = Self::new(0.0, v.x, v.y, v.z);
        let rotated = self.mul(p).mul(self.conjugate());
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Angular distance to `rhs` along the shortest arc, in radians.
    pub fn angle_to(self, rhs: Self) -> f32 {
        // |dot| collapses the double cover so q and -q are zero apart.
        2.0 * self.dot(rhs).abs().clamp(0.0, 1.0).acos()
    }

    /// Spherical linear interpolation from `self` to `other` at parameter `t`.
    ///
    /// Always interpolates along the shortest great-circle arc: when the dot
    /// product of the operands is negative, `other` is sign-flipped before
    /// interpolating so the blend does not unwind the long way around.
    /// Nearly-parallel inputs fall back to a normalized lerp, where the slerp
    /// denominator `sin θ` loses precision.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut end = other;
        let mut dot = self.dot(other);
        if dot < 0.0 {
            end = end.negate();
            dot = -dot;
        }

        if dot > SLERP_PARALLEL_THRESHOLD {
            let lerped = Self::new(
                self.w + (end.w - self.w) * t,
                self.x + (end.x - self.x) * t,
                self.y + (end.y - self.y) * t,
                self.z + (end.z - self.z) * t,
            );
            return lerped.normalize();
        }

        let theta_full = dot.clamp(-1.0, 1.0).acos();
        let sin_full = theta_full.sin();
        let weight_start = ((1.0 - t) * theta_full).sin() / sin_full;
        let weight_end = (t * theta_full).sin() / sin_full;

        Self::new(
            weight_start * self.w + weight_end * end.w,
            weight_start * self.x + weight_end * end.x,
            weight_start * self.y + weight_end * end.y,
            weight_start * self.z + weight_end * end.z,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WorldTransform
// ────────────────────────────────────────────────────────────────────────────

/// The pose of a node in the global coordinate frame, after all parent
/// transforms have been applied: position, per-axis scale, and rotation.
///
/// Anchor transforms are owned and updated by the external tracking system;
/// they are read-only inputs here. Whoever supplies one must have flushed any
/// pending hierarchy updates for the current frame first, or the pose lags a
/// frame behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Quaternion,
}

impl WorldTransform {
    /// Create a transform from its three parts.
    pub fn new(position: Vec3, scale: Vec3, rotation: Quaternion) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// Origin, unit scale, no rotation.
    pub fn identity() -> Self {
        Self::new(Vec3::zero(), Vec3::splat(1.0), Quaternion::identity())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
