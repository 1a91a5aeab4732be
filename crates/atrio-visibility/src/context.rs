//! The per-session visibility context.

use crate::gate::{self, GateDecision, Gated};
use crate::mode::ViewMode;
use crate::store::PermissionStore;

/// The visibility state threaded through the component tree.
///
/// One per running app session, passed by reference instead of living in
/// an ambient global. Components read through [`decide`](Self::decide) and
/// [`wrap`](Self::wrap); only the admin panel mutates, through
/// [`store_mut`](Self::store_mut).
pub struct VisibilityContext {
    store: PermissionStore,
    mode: ViewMode,
}

impl VisibilityContext {
    /// Context over the given store, starting in the owner view.
    pub fn new(store: PermissionStore) -> Self {
        Self {
            store,
            mode: ViewMode::default(),
        }
    }

    /// Session-only context for tests and previews.
    pub fn in_memory() -> Self {
        Self::new(PermissionStore::in_memory())
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch the active role.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn is_owner_view(&self) -> bool {
        self.mode.is_owner()
    }

    pub fn is_syndic_view(&self) -> bool {
        self.mode.is_syndic()
    }

    /// Gate decision for a feature id under the active mode.
    pub fn decide(&self, feature: &str) -> GateDecision {
        gate::decide(feature, self.mode, &self.store)
    }

    /// Build content behind a gate under the active mode.
    pub fn wrap<T>(&self, feature: &str, build: impl FnOnce() -> T) -> Option<Gated<T>> {
        gate::wrap(feature, self.mode, &self.store, build)
    }

    pub fn store(&self) -> &PermissionStore {
        &self.store
    }

    /// Mutable store access — the admin panel's single mutation entry
    /// point.
    pub fn store_mut(&mut self) -> &mut PermissionStore {
        &mut self.store
    }
}
