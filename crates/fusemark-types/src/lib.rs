use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier of one of the two tracked anchors (physical markers).
///
/// The set of anchors is closed: an event for an anchor outside this enum
/// cannot be constructed, so "unknown anchor id" is unrepresentable rather
/// than a runtime fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorId {
    A,
    B,
}

impl AnchorId {
    /// The opposite anchor.
    pub fn other(self) -> Self {
        match self {
            AnchorId::A => AnchorId::B,
            AnchorId::B => AnchorId::A,
        }
    }
}

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorId::A => write!(f, "A"),
            AnchorId::B => write!(f, "B"),
        }
    }
}

/// Whether the external tracker gained or lost lock on an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingEventKind {
    Found,
    Lost,
}

/// A single found/lost notification emitted by the external marker-tracking
/// subsystem and routed over the tracker bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// e.g., "fusemark-bridge::scripted"
    pub source: String,
    pub anchor: AnchorId,
    pub kind: TrackingEventKind,
}

impl TrackingEvent {
    /// Build a new event stamped with a fresh id and the current time.
    pub fn new(source: impl Into<String>, anchor: AnchorId, kind: TrackingEventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source: source.into(),
            anchor,
            kind,
        }
    }
}

/// Combined visibility of the two anchors.
///
/// Always derived from the two tracking flags via [`VisibilityState::from_flags`];
/// never stored or transitioned through an explicit table. Exactly one variant
/// holds for any flag combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityState {
    /// Neither anchor is tracked.
    Neither,
    /// Only anchor A is tracked.
    OnlyA,
    /// Only anchor B is tracked.
    OnlyB,
    /// Both anchors are tracked simultaneously.
    Both,
}

impl VisibilityState {
    /// Derive the state from the two tracking flags.
    pub fn from_flags(found_a: bool, found_b: bool) -> Self {
        match (found_a, found_b) {
            (false, false) => VisibilityState::Neither,
            (true, false) => VisibilityState::OnlyA,
            (false, true) => VisibilityState::OnlyB,
            (true, true) => VisibilityState::Both,
        }
    }

    /// The anchor that is visible alone, if the state is one of the two
    /// single-anchor variants.
    pub fn solo_anchor(self) -> Option<AnchorId> {
        match self {
            VisibilityState::OnlyA => Some(AnchorId::A),
            VisibilityState::OnlyB => Some(AnchorId::B),
            _ => None,
        }
    }
}

/// Which content configuration the scene should present. Exactly one config
/// corresponds to each [`VisibilityState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationConfig {
    /// Nothing shown; the tracker is still scanning.
    Hidden,
    /// Anchor A's content only.
    ShowA,
    /// Anchor B's content only.
    ShowB,
    /// The merged content only, positioned by pose fusion.
    ShowMerged,
}

/// Severity attached to a status line, carrying the color the status pill
/// renders it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusSeverity {
    /// Still scanning for anchors (gold).
    Pending,
    /// One anchor locked (white).
    Info,
    /// Both anchors locked (green).
    Success,
}

impl StatusSeverity {
    /// CSS color used by the status pill for this severity.
    pub fn css_color(self) -> &'static str {
        match self {
            StatusSeverity::Pending => "#FFD700",
            StatusSeverity::Info => "#FFF",
            StatusSeverity::Success => "#75d15a",
        }
    }
}

/// Global error type spanning bus delivery failures and configuration issues.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum FuseMarkError {
    #[error("Channel Error: {0}")]
    Channel(String),

    #[error("Config Error: {0}")]
    Config(String),
}
