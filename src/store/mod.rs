//! Key/value settings store scoped to an organization/application namespace

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading or writing a settings store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Config directory not available")]
    NoConfigDir,
}

/// A stored value: either text or an opaque byte blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    Text(String),
    Bytes(Vec<u8>),
}

/// Persistence contract the configuration dialog relies on.
///
/// Writes may be buffered until [`SettingsStore::sync`] is called.
pub trait SettingsStore {
    fn value(&self, key: &str) -> Option<StoreValue>;

    fn set_value(&mut self, key: &str, value: StoreValue) -> Result<(), StoreError>;

    /// Flush buffered writes to the backing medium
    fn sync(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Text lookup with a default for missing keys
    fn string(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(StoreValue::Text(text)) => text,
            Some(StoreValue::Bytes(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
            None => default.to_string(),
        }
    }

    /// Byte lookup; missing keys yield an empty blob
    fn bytes(&self, key: &str) -> Vec<u8> {
        match self.value(key) {
            Some(StoreValue::Bytes(bytes)) => bytes,
            Some(StoreValue::Text(text)) => text.into_bytes(),
            None => Vec::new(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_value(key, StoreValue::Text(value.to_string()))
    }

    fn set_bytes(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.set_value(key, StoreValue::Bytes(value.to_vec()))
    }
}

/// In-process store, injected in place of the file store by tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, StoreValue>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn value(&self, key: &str) -> Option<StoreValue> {
        self.entries.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: StoreValue) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a pretty-printed JSON file.
///
/// `entries` mirrors the file; writes wait in `pending` until a sync
/// reaches the disk and are dropped if it does not.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, StoreValue>,
    pending: BTreeMap<String, StoreValue>,
}

impl JsonFileStore {
    /// Default location: `<config_dir>/<organization>/<application>.json`
    pub fn default_path(organization: &str, application: &str) -> Result<PathBuf, StoreError> {
        let dir = dirs::config_dir()
            .ok_or(StoreError::NoConfigDir)?
            .join(organization);
        Ok(dir.join(format!("{}.json", application)))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, starting empty");
            return Ok(Self::empty(path));
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let entries = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Settings file loaded");
        Ok(Self {
            path,
            entries,
            pending: BTreeMap::new(),
        })
    }

    /// An empty store that will be written to `path` on the next sync
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            pending: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn value(&self, key: &str) -> Option<StoreValue> {
        self.pending
            .get(key)
            .or_else(|| self.entries.get(key))
            .cloned()
    }

    fn set_value(&mut self, key: &str, value: StoreValue) -> Result<(), StoreError> {
        self.pending.insert(key.to_string(), value);
        Ok(())
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        let pending = std::mem::take(&mut self.pending);
        let mut merged = self.entries.clone();
        merged.extend(pending);

        if let Err(e) = self.write_file(&merged) {
            tracing::warn!(path = %self.path.display(), error = %e, "Settings not written, pending changes dropped");
            return Err(e);
        }

        self.entries = merged;
        tracing::info!(path = %self.path.display(), keys = self.entries.len(), "Settings written");
        Ok(())
    }
}

impl JsonFileStore {
    fn write_file(&self, entries: &BTreeMap<String, StoreValue>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(io_err)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let store = MemoryStore::new();

        assert_eq!(store.string("Username:", "upsgenerale"), "upsgenerale");
        assert!(store.bytes("Configuration Dialog").is_empty());
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path().join("UPS-Alarm.json")).unwrap();

        assert!(store.value("To:").is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("IPCF-CNR").join("UPS-Alarm.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_string("Mail Server:", "smtp.example.org").unwrap();
        store.set_bytes("Configuration Dialog", &[0, 80, 0, 24]).unwrap();
        store.sync().unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.string("Mail Server:", ""), "smtp.example.org");
        assert_eq!(reopened.bytes("Configuration Dialog"), vec![0, 80, 0, 24]);
    }

    #[test]
    fn test_unsynced_writes_are_not_persisted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("UPS-Alarm.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_string("Cc:", "ops@example.org").unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_failed_sync_drops_pending_writes() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut store = JsonFileStore::empty(blocker.join("UPS-Alarm.json"));
        store.set_string("Username:", "unsaved").unwrap();
        assert_eq!(store.string("Username:", ""), "unsaved");

        assert!(matches!(store.sync(), Err(StoreError::Io { .. })));
        assert!(store.value("Username:").is_none());
    }

    #[test]
    fn test_failed_sync_keeps_last_written_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("UPS-Alarm.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_string("To:", "lab@example.org").unwrap();
        store.sync().unwrap();

        // A directory in place of the file makes the next write fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        store.set_string("To:", "nobody@example.org").unwrap();
        assert!(store.sync().is_err());
        assert_eq!(store.string("To:", ""), "lab@example.org");
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("UPS-Alarm.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_bytes_read_as_text_are_lossy() {
        let mut store = MemoryStore::new();
        store.set_bytes("Password:", b"secret").unwrap();

        assert_eq!(store.string("Password:", ""), "secret");
    }
}
