//! Blob-level settings storage.
//!
//! Each settings document is serialized whole into a single entry keyed by
//! a versioned namespace string, the shape of a browser `localStorage`
//! slot. Documents are small and mutated only from admin interactions, so
//! whole-blob writes are cheap enough.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors from the settings storage layer.
///
/// These never escape the stores built on top: reads fall back to the
/// compiled-in defaults and writes are best-effort, so callers see at most
/// a warning in the logs.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed (missing directory permissions, full disk).
    #[error("storage I/O error: {0}")]
    Io(String),
    /// The stored blob did not parse as the expected JSON document.
    #[error("malformed settings blob: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Malformed(err.to_string())
    }
}

/// Blob-level key-value storage, one document per namespace.
pub trait SettingsStorage: Send {
    /// Read the blob stored under a namespace, if any.
    ///
    /// A namespace that has never been written is `Ok(None)`, not an error.
    fn read(&self, namespace: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under a namespace.
    fn write(&mut self, namespace: &str, blob: &str) -> Result<(), StorageError>;
}

/// In-memory storage: session-only state and the test double.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry, e.g. state left by an earlier
    /// session.
    pub fn with_entry(namespace: &str, blob: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(namespace.to_string(), blob.to_string());
        storage
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(namespace).cloned())
    }

    fn write(&mut self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        self.entries.insert(namespace.to_string(), blob.to_string());
        Ok(())
    }
}

/// File-backed storage: one `<namespace>.json` file per namespace under a
/// root directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Storage rooted at the given directory. The directory is created on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage under `~/.atrio`, or `None` when no home directory can be
    /// resolved.
    pub fn in_home() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(".atrio")))
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.root.join(format!("{namespace}.json"))
    }
}

impl SettingsStorage for JsonFileStorage {
    fn read(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(namespace)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, namespace: &str, blob: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(namespace), blob)?;
        Ok(())
    }
}

/// Read and parse the document stored under a namespace, falling back to
/// the type's default when nothing is stored or the blob is unusable.
pub fn load_json<T>(storage: &dyn SettingsStorage, namespace: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.read(namespace) {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Discarding malformed blob under {namespace}: {err}");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!("Failed to read {namespace}, starting from defaults: {err}");
            T::default()
        }
    }
}

/// Serialize and write a document under a namespace, best-effort.
///
/// Failures are logged and swallowed; the caller's in-memory state stays
/// authoritative for the session.
pub fn store_json<T: Serialize>(storage: &mut dyn SettingsStorage, namespace: &str, value: &T) {
    let blob = match serde_json::to_string(value) {
        Ok(blob) => blob,
        Err(err) => {
            tracing::warn!("Failed to serialize {namespace}: {err}");
            return;
        }
    };
    if let Err(err) = storage.write(namespace, &blob) {
        tracing::warn!("Failed to persist {namespace}, keeping in-memory state: {err}");
    }
}
