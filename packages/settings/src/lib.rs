// ABOUTME: User settings normalization for Payday
// ABOUTME: Typed default-aware codec over the flat key-value settings store

pub mod codec;
pub mod keys;
pub mod model;
pub mod types;

// Re-export main types
pub use model::UserSettings;
pub use types::{PayFrequency, SettingsError, TimeOfDay};
