//! `fusemark-scene` – boundary to the external scene and status UI.
//!
//! The core never reaches into a scene graph by global identifier; it talks
//! to narrow traits handed in at construction time, so any renderer (or a
//! test double) can sit on the other side.
//!
//! # Modules
//!
//! - [`sink`] – [`ContentSink`][sink::ContentSink], [`StatusSink`][sink::StatusSink]
//!   and [`PoseSource`][sink::PoseSource]: the three seams to the outside.
//! - [`presentation`] – [`PresentationDriver`][presentation::PresentationDriver]:
//!   maps a visibility state to exactly one content configuration and applies
//!   it through the sinks.
//! - [`sim`] – [`SimContent`][sim::SimContent], [`SimStatus`][sim::SimStatus]
//!   and [`FixedPoses`][sim::FixedPoses]: in-memory scene for headless tests
//!   and the demo binary.

pub mod presentation;
pub mod sim;
pub mod sink;
