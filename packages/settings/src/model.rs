// ABOUTME: The editable user settings aggregate
// ABOUTME: Loads every setting with its default and saves them back key by key

use serde::{Deserialize, Serialize};

use payday_storage::{SettingsStore, StorageResult};

use crate::codec;
use crate::keys;
use crate::types::{PayFrequency, TimeOfDay};

/// Everything the earnings view reads, held as editable state between a
/// load and an explicit save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub currency: String,
    pub rate: f64,
    pub frequency: PayFrequency,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            rate: 100.0,
            frequency: PayFrequency::Hour,
            start_time: TimeOfDay::new(9, 0),
            end_time: TimeOfDay::new(18, 0),
        }
    }
}

impl UserSettings {
    /// Decodes every setting from the store, materializing the default for
    /// anything absent or malformed. Total: a fresh store yields
    /// `UserSettings::default()`.
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();
        Self {
            currency: codec::decode_string(store, keys::CURRENCY, &defaults.currency),
            rate: codec::decode_number(store, keys::HOURLY_RATE, defaults.rate),
            frequency: codec::decode_frequency(store, keys::FREQUENCY, defaults.frequency),
            start_time: codec::decode_time(
                store,
                keys::START_TIME,
                defaults.start_time.hour,
                defaults.start_time.minute,
            ),
            end_time: codec::decode_time(
                store,
                keys::END_TIME,
                defaults.end_time.hour,
                defaults.end_time.minute,
            ),
        }
    }

    /// Encodes every setting back into the store. Writes are independent,
    /// one per key; an environment failure leaves earlier keys written.
    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) -> StorageResult<()> {
        codec::encode_string(store, keys::CURRENCY, &self.currency)?;
        codec::encode_number(store, keys::HOURLY_RATE, self.rate)?;
        codec::encode_frequency(store, keys::FREQUENCY, self.frequency)?;
        codec::encode_time(store, keys::START_TIME, self.start_time)?;
        codec::encode_time(store, keys::END_TIME, self.end_time)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use payday_storage::MemoryStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_from_empty_store_is_default() {
        let store = MemoryStore::new();
        assert_eq!(UserSettings::load(&store), UserSettings::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let settings = UserSettings {
            currency: "₿".to_string(),
            rate: 37.5,
            frequency: PayFrequency::Year,
            start_time: TimeOfDay::new(8, 5),
            end_time: TimeOfDay::new(16, 45),
        };

        settings.save(&mut store).unwrap();
        assert_eq!(UserSettings::load(&store), settings);
    }

    #[test]
    fn test_malformed_entries_fall_back_field_by_field() {
        let mut store = MemoryStore::new();
        store.set(keys::HOURLY_RATE, "abc").unwrap();
        store.set(keys::START_TIME, "17:30").unwrap();

        let settings = UserSettings::load(&store);
        assert_eq!(settings.rate, 100.0);
        assert_eq!(settings.start_time, TimeOfDay::new(17, 30));
        assert_eq!(settings.end_time, TimeOfDay::new(18, 0));
    }

    #[test]
    fn test_inverted_window_is_not_rejected() {
        let mut store = MemoryStore::new();
        let settings = UserSettings {
            start_time: TimeOfDay::new(18, 0),
            end_time: TimeOfDay::new(9, 0),
            ..UserSettings::default()
        };

        settings.save(&mut store).unwrap();
        assert_eq!(UserSettings::load(&store), settings);
    }
}
