//! `fusemark-runtime` – the per-frame fusion loop.
//!
//! # Modules
//!
//! - [`tracker`] – [`VisibilityTracker`][tracker::VisibilityTracker]: the two
//!   found/lost flags and the visibility state derived from them.
//! - [`session`] – [`FusionSession`][session::FusionSession]: consumes
//!   tracking events, reapplies the presentation on every state transition,
//!   and writes the fused transform while both anchors are visible.
//! - [`telemetry`] – tracing subscriber / OTLP pipeline initialisation.

pub mod session;
pub mod telemetry;
pub mod tracker;
