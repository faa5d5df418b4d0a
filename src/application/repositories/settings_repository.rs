//! SettingsRepository - the persisted worry-time slot.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::triage::WorryTimeSettings;
use crate::ports::{keys, KeyValueStore, StoreError};

use super::persisted::{load_value, store_value, unsaved_notice, PersistStatus};

pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
    settings: WorryTimeSettings,
    unsaved: Option<StoreError>,
}

impl SettingsRepository {
    /// Loads stored settings, falling back to `defaults` when absent or invalid.
    pub fn load(store: Arc<dyn KeyValueStore>, defaults: WorryTimeSettings) -> Self {
        let settings = load_value(store.as_ref(), keys::WORRY_TIME).unwrap_or(defaults);
        Self {
            store,
            settings,
            unsaved: None,
        }
    }

    pub fn get(&self) -> WorryTimeSettings {
        self.settings
    }

    /// Validates and stores a new slot.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` for an invalid hour, minute, or duration
    pub fn set(
        &mut self,
        hour: u32,
        minute: u32,
        duration: u32,
    ) -> Result<PersistStatus, ValidationError> {
        let settings = WorryTimeSettings::new(hour, minute, duration)?;
        self.settings = settings;
        let persist = store_value(self.store.as_ref(), keys::WORRY_TIME, &settings);
        self.unsaved = match &persist {
            PersistStatus::Saved => None,
            PersistStatus::Unsaved(e) => Some(e.clone()),
        };
        tracing::info!(worry_time = %settings, duration, "worry time updated");
        Ok(persist)
    }

    pub fn unsaved_notice(&self) -> Option<String> {
        self.unsaved.as_ref().map(unsaved_notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;

    #[test]
    fn absent_settings_use_defaults() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = SettingsRepository::load(store, WorryTimeSettings::default());
        assert_eq!(repo.get().to_string(), "18:00");
        assert_eq!(repo.get().duration(), 15);
    }

    #[test]
    fn invalid_stored_settings_use_defaults() {
        let store = Arc::new(
            InMemoryKeyValueStore::new()
                .with_value(keys::WORRY_TIME, r#"{"hour":42,"minute":0,"duration":15}"#),
        );
        let repo = SettingsRepository::load(store, WorryTimeSettings::default());
        assert_eq!(repo.get(), WorryTimeSettings::default());
    }

    #[test]
    fn set_persists_and_reloads() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SettingsRepository::load(store.clone(), WorryTimeSettings::default());

        assert!(repo.set(9, 30, 20).unwrap().is_saved());

        let reloaded = SettingsRepository::load(store, WorryTimeSettings::default());
        assert_eq!(reloaded.get(), WorryTimeSettings::new(9, 30, 20).unwrap());
    }

    #[test]
    fn set_rejects_invalid_values_without_change() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SettingsRepository::load(store, WorryTimeSettings::default());

        assert!(repo.set(24, 0, 15).is_err());
        assert_eq!(repo.get(), WorryTimeSettings::default());
    }

    #[test]
    fn failed_write_keeps_new_value() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut repo = SettingsRepository::load(store.clone(), WorryTimeSettings::default());
        store.fail_writes_with(StoreError::Unavailable("offline".to_string()));

        let persist = repo.set(7, 0, 10).unwrap();
        assert!(!persist.is_saved());
        assert_eq!(repo.get().hour(), 7);
        assert!(repo.unsaved_notice().is_some());
    }
}
