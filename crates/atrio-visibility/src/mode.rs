//! The two-role view mode.

use serde::{Deserialize, Serialize};

/// Who the portal is currently rendering for.
///
/// `Owner` is the editing role: it sees every surface, including the ones
/// hidden from the other role, so it can configure them. `Syndic` is the
/// restricted viewer role the overrides are written for.
///
/// Session-local state. It is never persisted, so every session starts in
/// `Owner`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum ViewMode {
    #[default]
    Owner,
    Syndic,
}

impl ViewMode {
    pub fn is_owner(&self) -> bool {
        matches!(self, ViewMode::Owner)
    }

    pub fn is_syndic(&self) -> bool {
        matches!(self, ViewMode::Syndic)
    }

    /// The other role, for the mode switch control.
    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Owner => ViewMode::Syndic,
            ViewMode::Syndic => ViewMode::Owner,
        }
    }

    /// Display name for UI.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Owner => "Owner",
            ViewMode::Syndic => "Syndic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_owner() {
        assert_eq!(ViewMode::default(), ViewMode::Owner);
    }

    #[test]
    fn derived_reads_are_exclusive_and_exhaustive() {
        for mode in [ViewMode::Owner, ViewMode::Syndic] {
            assert_ne!(mode.is_owner(), mode.is_syndic());
        }
    }

    #[test]
    fn toggled_switches_roles() {
        assert_eq!(ViewMode::Owner.toggled(), ViewMode::Syndic);
        assert_eq!(ViewMode::Syndic.toggled(), ViewMode::Owner);
        assert_eq!(ViewMode::Owner.toggled().toggled(), ViewMode::Owner);
    }
}
