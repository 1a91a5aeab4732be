//! The persisted feature override store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::storage::{load_json, store_json, JsonFileStorage, MemoryStorage, SettingsStorage};

/// Storage namespace for the portal's feature overrides.
pub const PERMISSIONS_NAMESPACE: &str = "atrio_permissions_v1";

/// Sparse override set over feature ids.
///
/// Absence means visible: the map records explicit denials and explicit
/// grants, never the full feature set. A feature id that has never been
/// toggled therefore resolves to visible against any stored blob, which is
/// what keeps old blobs compatible when new surfaces ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(BTreeMap<String, bool>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective visibility of an id: the stored flag, or `true` when
    /// absent.
    pub fn effective(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(true)
    }

    /// Insert or overwrite the flag for an id.
    pub fn set(&mut self, key: &str, visible: bool) {
        self.0.insert(key.to_string(), visible);
    }

    /// Flip the effective value and return the new one.
    ///
    /// The first toggle of an absent id stores `false`, since absent reads
    /// as visible.
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.effective(key);
        self.set(key, next);
        next
    }

    /// Number of stored overrides (not the number of features).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored entries, for the admin panel listing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(key, visible)| (key.as_str(), *visible))
    }
}

/// Write-through store binding an override map to a storage namespace.
///
/// Every mutation serializes the whole map and hands it to the backend
/// before returning. Storage failures are absorbed: the in-memory map
/// stays authoritative for the session and the failure is logged.
pub struct PermissionStore {
    overrides: Overrides,
    namespace: String,
    storage: Box<dyn SettingsStorage>,
}

impl PermissionStore {
    /// Load the overrides stored under `namespace`, falling back to the
    /// empty default map when nothing is stored or the blob is malformed.
    pub fn load(namespace: impl Into<String>, storage: Box<dyn SettingsStorage>) -> Self {
        let namespace = namespace.into();
        let overrides = load_json(storage.as_ref(), &namespace);
        Self {
            overrides,
            namespace,
            storage,
        }
    }

    /// Session-only store over fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::load(PERMISSIONS_NAMESPACE, Box::new(MemoryStorage::new()))
    }

    /// Store over the user's `~/.atrio` settings directory, or session-only
    /// storage when no home directory can be resolved.
    pub fn open_user() -> Self {
        match JsonFileStorage::in_home() {
            Some(files) => Self::load(PERMISSIONS_NAMESPACE, Box::new(files)),
            None => Self::in_memory(),
        }
    }

    /// Effective visibility of a feature id. Unknown ids are visible.
    pub fn is_visible(&self, key: &str) -> bool {
        self.overrides.effective(key)
    }

    /// Set a feature's visibility and persist.
    pub fn set_visible(&mut self, key: &str, visible: bool) {
        self.overrides.set(key, visible);
        tracing::debug!("Feature {key} set to visible={visible}");
        self.persist();
    }

    /// Flip a feature's effective visibility, persist, and return the new
    /// value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let visible = self.overrides.toggle(key);
        tracing::debug!("Feature {key} toggled to visible={visible}");
        self.persist();
        visible
    }

    /// The stored override set, for the admin panel listing.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn persist(&mut self) {
        store_json(self.storage.as_mut(), &self.namespace, &self.overrides);
    }
}
