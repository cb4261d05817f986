//! [`PresentationDriver`] – visibility state to scene content.
//!
//! Maps each [`VisibilityState`] to exactly one [`PresentationConfig`] and
//! pushes the corresponding side effects through the [`ContentSink`] and
//! [`StatusSink`] handles:
//!
//! | State | Config | Content | Status |
//! |---|---|---|---|
//! | `Neither` | `Hidden` | none | "Scanning..." (gold) |
//! | `OnlyA` | `ShowA` | A only, A's action offered | "<label A> detected." |
//! | `OnlyB` | `ShowB` | B only, B's action offered | "<label B> detected." |
//! | `Both` | `ShowMerged` | merged only | "Both ... detected!" (green) |
//!
//! The mapping is total; the only internal state is the last applied config,
//! kept so a repeated state does not re-toggle every node.

use fusemark_types::{AnchorId, PresentationConfig, StatusSeverity, VisibilityState};
use tracing::debug;

use crate::sink::{ContentNode, ContentSink, StatusSink};

/// Display names for the two anchors, used in status lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLabels {
    pub a: String,
    pub b: String,
}

impl AnchorLabels {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    fn for_anchor(&self, anchor: AnchorId) -> &str {
        match anchor {
            AnchorId::A => &self.a,
            AnchorId::B => &self.b,
        }
    }
}

impl Default for AnchorLabels {
    fn default() -> Self {
        Self::new("Anchor A", "Anchor B")
    }
}

/// Drives the scene content through the closed set of presentation configs.
///
/// # Example
///
/// ```
/// use fusemark_scene::presentation::PresentationDriver;
/// use fusemark_scene::sim::{SimContent, SimStatus};
/// use fusemark_types::{PresentationConfig, VisibilityState};
///
/// let mut content = SimContent::new();
/// let mut status = SimStatus::new();
/// let mut driver = PresentationDriver::default();
///
/// let applied = driver.apply(VisibilityState::OnlyA, &mut content, &mut status);
/// assert_eq!(applied, PresentationConfig::ShowA);
/// ```
#[derive(Debug, Default)]
pub struct PresentationDriver {
    labels: AnchorLabels,
    last_applied: Option<PresentationConfig>,
}

impl PresentationDriver {
    /// Create a driver with the given anchor display labels.
    pub fn new(labels: AnchorLabels) -> Self {
        Self {
            labels,
            last_applied: None,
        }
    }

    /// The config for a state. Pure, total, and referentially transparent.
    pub fn config_for(state: VisibilityState) -> PresentationConfig {
        match state {
            VisibilityState::Neither => PresentationConfig::Hidden,
            VisibilityState::OnlyA => PresentationConfig::ShowA,
            VisibilityState::OnlyB => PresentationConfig::ShowB,
            VisibilityState::Both => PresentationConfig::ShowMerged,
        }
    }

    /// The config most recently pushed to the sinks, if any.
    pub fn last_applied(&self) -> Option<PresentationConfig> {
        self.last_applied
    }

    /// Map `state` to its config and apply it through the sinks.
    ///
    /// Re-applying the config that is already live is skipped; the skip is an
    /// efficiency measure only, so [`PresentationDriver::force_reapply`] can
    /// drop the memo when the hosting scene was rebuilt underneath us.
    pub fn apply(
        &mut self,
        state: VisibilityState,
        content: &mut impl ContentSink,
        status: &mut impl StatusSink,
    ) -> PresentationConfig {
        let config = Self::config_for(state);
        if self.last_applied == Some(config) {
            debug!(?config, "presentation unchanged, skipping reapply");
            return config;
        }

        match config {
            PresentationConfig::Hidden => {
                self.show_only(content, None);
                status.set_status("Scanning...", StatusSeverity::Pending);
                status.set_action_visible(AnchorId::A, false);
                status.set_action_visible(AnchorId::B, false);
            }
            PresentationConfig::ShowA => self.apply_solo(AnchorId::A, content, status),
            PresentationConfig::ShowB => self.apply_solo(AnchorId::B, content, status),
            PresentationConfig::ShowMerged => {
                self.show_only(content, Some(ContentNode::Merged));
                status.set_status(
                    &format!("Both {} and {} detected!", self.labels.a, self.labels.b),
                    StatusSeverity::Success,
                );
                status.set_action_visible(AnchorId::A, false);
                status.set_action_visible(AnchorId::B, false);
            }
        }

        debug!(?state, ?config, "presentation applied");
        self.last_applied = Some(config);
        config
    }

    /// Forget the last applied config so the next [`apply`][Self::apply]
    /// pushes every toggle again.
    pub fn force_reapply(&mut self) {
        self.last_applied = None;
    }

    fn apply_solo(
        &self,
        anchor: AnchorId,
        content: &mut impl ContentSink,
        status: &mut impl StatusSink,
    ) {
        self.show_only(content, Some(ContentNode::for_anchor(anchor)));
        status.set_status(
            &format!("{} detected.", self.labels.for_anchor(anchor)),
            StatusSeverity::Info,
        );
        status.set_action_visible(anchor, true);
        status.set_action_visible(anchor.other(), false);
    }

    fn show_only(&self, content: &mut impl ContentSink, visible: Option<ContentNode>) {
        for node in [ContentNode::AnchorA, ContentNode::AnchorB, ContentNode::Merged] {
            content.set_content_visible(node, Some(node) == visible);
        }
    }
}
