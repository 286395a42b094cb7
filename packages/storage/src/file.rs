// ABOUTME: Durable settings store persisted as a flat JSON object
// ABOUTME: Loads the whole map on open, rewrites it atomically on every set

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::{SettingsStore, StorageError, StorageResult};

/// Durable store backed by a single JSON file of string pairs.
///
/// The whole map is read once on open and held in memory; `set` updates the
/// map and flushes the file immediately, so entries survive the process.
/// A missing file is a fresh install and opens as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, reading existing entries if the file is
    /// present. An unreadable or malformed file is an environment error.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };
        debug!(path = %path.display(), entries = entries.len(), "settings store opened");
        Ok(Self { path, entries })
    }

    /// Default production location: `<config dir>/payday/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("payday")
            .join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;

        // Write next to the target and rename, so the file is never
        // observed half-written.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "settings persisted");
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("settings.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get("currency"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(store_path(&dir)).unwrap();
        store.set("hourlyRate", "37.5").unwrap();
        assert_eq!(store.get("hourlyRate"), Some("37.5".to_string()));
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = FileStore::open(&path).unwrap();
        store.set("currency", "₱").unwrap();
        store.set("startTime", "9:0").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("currency"), Some("₱".to_string()));
        assert_eq!(reopened.get("startTime"), Some("9:0".to_string()));
    }

    #[test]
    fn test_file_is_flat_string_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let mut store = FileStore::open(&path).unwrap();
        store.set("endTime", "18:0").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("endTime"), Some(&"18:0".to_string()));
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("currency", "$").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StorageError::Json(_))));
    }
}
