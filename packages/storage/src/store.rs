use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Flat string-key to string-value persistence surface.
///
/// Values may be absent on first use (fresh install); every read is
/// optional and typing happens at the codec boundary, not here. Each key
/// write is independent; there is no cross-key transaction.
pub trait SettingsStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Creates or overwrites the entry for `key`.
    ///
    /// Errors are environment-level storage failures only (disk full,
    /// unwritable path); callers treat them as fatal rather than retrying.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
