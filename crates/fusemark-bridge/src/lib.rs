//! `fusemark-bridge` – plumbing between the external marker tracker and the
//! fusion core.
//!
//! # Modules
//!
//! - [`bus`] – [`TrackerBus`][bus::TrackerBus]: broadcast channel carrying
//!   [`TrackingEvent`][fusemark_types::TrackingEvent]s from whatever detects
//!   the markers to whoever consumes them.
//! - [`scripted`] – [`ScriptedFeed`][scripted::ScriptedFeed]: deterministic
//!   tick-indexed replay of found/lost events for demos and headless tests.

pub mod bus;
pub mod scripted;

pub use bus::TrackerBus;
