//! `fusemark-perception` – spatial math layer.
//!
//! Turns the two anchors' externally-tracked world poses into the single
//! blended pose that positions the merged content.
//!
//! # Modules
//!
//! - [`transform`] – [`Vec3`][transform::Vec3], [`Quaternion`][transform::Quaternion]
//!   and [`WorldTransform`][transform::WorldTransform]: the position / scale /
//!   rotation triple reported per anchor, with shortest-arc spherical
//!   interpolation.
//! - [`fusion`] – [`fuse`][fusion::fuse]: the per-frame blend of two anchor
//!   poses (midpoint position, anchor-A scale, half-way rotation).

pub mod fusion;
pub mod transform;
