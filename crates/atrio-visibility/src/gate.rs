//! The feature gate: the single render decision point.
//!
//! Components never read the override store directly; they name a feature
//! id and let the gate combine it with the active [`ViewMode`]. The gate
//! is a pure function of its inputs, so it can be applied repeatedly and
//! nested in any order.

use serde::{Deserialize, Serialize};

use crate::mode::ViewMode;
use crate::store::PermissionStore;

/// How a gated piece of content renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum GateDecision {
    /// Render the content exactly as provided.
    Show,
    /// Render the content with a muted affordance (reduced opacity, dashed
    /// outline): the owner's preview of a feature hidden from the syndic.
    /// Cosmetic only — the content stays interactive.
    ShowMuted,
    /// Render nothing. The content and the space it would occupy are
    /// absent from the output tree, not visually hidden, so the restricted
    /// role cannot discover the feature by inspection.
    Hide,
}

impl GateDecision {
    /// The decision table over a feature's visibility and the active mode.
    ///
    /// The owner always gets output; only the syndic view suppresses.
    pub fn for_feature(visible: bool, mode: ViewMode) -> GateDecision {
        match (mode, visible) {
            (_, true) => GateDecision::Show,
            (ViewMode::Owner, false) => GateDecision::ShowMuted,
            (ViewMode::Syndic, false) => GateDecision::Hide,
        }
    }

    /// Whether any output is produced.
    pub fn renders(&self) -> bool {
        !matches!(self, GateDecision::Hide)
    }

    /// Whether the muted affordance applies.
    pub fn is_muted(&self) -> bool {
        matches!(self, GateDecision::ShowMuted)
    }
}

/// Content that survived its gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gated<T> {
    pub content: T,
    /// Whether to draw the muted affordance around the content.
    pub muted: bool,
}

/// Resolve a feature id against the store.
///
/// Ids that are empty or all whitespace resolve to visible: failing open
/// keeps a stray binding from breaking the owner's editing experience.
pub fn resolve_feature(feature: &str, store: &PermissionStore) -> bool {
    if feature.trim().is_empty() {
        return true;
    }
    store.is_visible(feature)
}

/// Evaluate the gate for a feature id.
pub fn decide(feature: &str, mode: ViewMode, store: &PermissionStore) -> GateDecision {
    GateDecision::for_feature(resolve_feature(feature, store), mode)
}

/// Build content behind a gate.
///
/// `build` runs only when the decision renders; a hidden gate returns
/// `None` without invoking it. Nesting falls out of that: a gate inside
/// gated content is only ever evaluated when the parent rendered.
pub fn wrap<T>(
    feature: &str,
    mode: ViewMode,
    store: &PermissionStore,
    build: impl FnOnce() -> T,
) -> Option<Gated<T>> {
    let decision = decide(feature, mode, store);
    if !decision.renders() {
        return None;
    }
    Some(Gated {
        content: build(),
        muted: decision.is_muted(),
    })
}
