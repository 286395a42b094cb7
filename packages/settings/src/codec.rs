// ABOUTME: Typed default-aware codec over raw store entries
// ABOUTME: Decode operations substitute a caller-supplied default on any absence or malformation

use tracing::debug;

use payday_storage::{SettingsStore, StorageResult};

use crate::types::{PayFrequency, TimeOfDay};

/// Returns the stored value verbatim when present and non-empty, otherwise
/// `default`. No trimming, no transformation.
pub fn decode_string<S: SettingsStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    match store.get(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parses the stored value as a number. An absent key, an empty string, a
/// failed parse, or a non-finite result all fall back to `default`. No
/// range validation; zero and negative values pass through untouched.
pub fn decode_number<S: SettingsStore + ?Sized>(store: &S, key: &str, default: f64) -> f64 {
    store
        .get(key)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

/// Decodes a stored `"H:M"` pair. The whole default pair is returned when
/// the key is absent, the value does not split into exactly two parts, or
/// either side fails the integer parse; there is never a partial merge.
/// Out-of-range components in a well-shaped value ("99:99") are kept
/// verbatim, not clamped.
pub fn decode_time<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    default_hour: u32,
    default_minute: u32,
) -> TimeOfDay {
    let fallback = TimeOfDay::new(default_hour, default_minute);
    let Some(raw) = store.get(key) else {
        return fallback;
    };
    match raw.parse::<TimeOfDay>() {
        Ok(time) => time,
        Err(_) => {
            debug!(key, %raw, "unparsable stored time, falling back to default");
            fallback
        }
    }
}

/// Decodes a stored frequency word; unknown or absent values fall back to
/// `default`.
pub fn decode_frequency<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    default: PayFrequency,
) -> PayFrequency {
    store
        .get(key)
        .and_then(|raw| raw.parse::<PayFrequency>().ok())
        .unwrap_or(default)
}

/// Stores the string verbatim.
pub fn encode_string<S: SettingsStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &str,
) -> StorageResult<()> {
    store.set(key, value)
}

/// Stores the shortest round-trip decimal form (`"100"`, not `"100.0"`).
pub fn encode_number<S: SettingsStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: f64,
) -> StorageResult<()> {
    store.set(key, &value.to_string())
}

/// Stores the hour and minute of `value` as unpadded `"H:M"`.
///
/// Accepts any time-carrying value (a `TimeOfDay`, or any chrono `Timelike`
/// by reference); a full timestamp contributes only its hour and minute,
/// and the date component never reaches the store.
pub fn encode_time<S: SettingsStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: impl Into<TimeOfDay>,
) -> StorageResult<()> {
    store.set(key, &value.into().to_string())
}

/// Stores the lowercase frequency word.
pub fn encode_frequency<S: SettingsStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: PayFrequency,
) -> StorageResult<()> {
    store.set(key, value.as_str())
}
