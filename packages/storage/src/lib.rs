// ABOUTME: Settings persistence layer for Payday
// ABOUTME: Flat key-value store trait with in-memory and file-backed implementations

pub mod file;
pub mod memory;
pub mod store;

// Re-export main types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{SettingsStore, StorageError, StorageResult};
