//! Write-through persistence shared by the repositories.
//!
//! A [`PersistedCollection`] keeps the authoritative copy in memory and
//! rewrites the whole serialized collection under its key after every
//! mutation. A failed write never rolls back the in-memory change; it is
//! reported as [`PersistStatus::Unsaved`] and remembered until the next
//! successful write.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::ports::{KeyValueStore, StoreError};

/// Outcome of the write that followed a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Saved,
    Unsaved(StoreError),
}

impl PersistStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistStatus::Saved)
    }

    /// User-facing notice for a failed write.
    pub fn notice(&self) -> Option<String> {
        match self {
            PersistStatus::Saved => None,
            PersistStatus::Unsaved(err) => Some(unsaved_notice(err)),
        }
    }
}

/// A mutation result paired with how its write went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved<T> {
    pub value: T,
    pub persist: PersistStatus,
}

pub(crate) fn unsaved_notice(err: &StoreError) -> String {
    format!("Your changes are kept for now but could not be saved: {}", err)
}

/// Reads and decodes one key, treating absent or malformed data as `None`.
pub(crate) fn load_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed, starting empty");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "persisted data is malformed, ignoring it");
            None
        }
    }
}

/// Serializes and writes one key.
pub(crate) fn store_value<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> PersistStatus {
    let result = serde_json::to_string(value)
        .map_err(|e| StoreError::Unavailable(e.to_string()))
        .and_then(|json| store.write(key, &json));
    match result {
        Ok(()) => PersistStatus::Saved,
        Err(e) => {
            tracing::warn!(key, error = %e, "write-through failed, change kept in memory");
            PersistStatus::Unsaved(e)
        }
    }
}

/// An in-memory list mirrored to one store key.
pub(crate) struct PersistedCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    items: Vec<T>,
    unsaved: Option<StoreError>,
}

impl<T: Serialize + DeserializeOwned> PersistedCollection<T> {
    pub fn load(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let items: Vec<T> = load_value(store.as_ref(), key).unwrap_or_default();
        tracing::debug!(key, count = items.len(), "collection loaded");
        Self {
            store,
            key,
            items,
            unsaved: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Writes the whole collection and tracks the unsaved notice.
    pub fn persist(&mut self) -> PersistStatus {
        let status = store_value(self.store.as_ref(), self.key, &self.items);
        self.unsaved = match &status {
            PersistStatus::Saved => None,
            PersistStatus::Unsaved(e) => Some(e.clone()),
        };
        status
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
    fn missing_key_loads_empty() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let collection: PersistedCollection<String> = PersistedCollection::load(store, "items");
        assert!(collection.items().is_empty());
    }

    #[test]
    fn malformed_value_loads_empty() {
        let store = Arc::new(InMemoryKeyValueStore::new().with_value("items", "{not json"));
        let collection: PersistedCollection<String> = PersistedCollection::load(store, "items");
        assert!(collection.items().is_empty());
    }

    #[test]
    fn failed_write_is_remembered_until_next_success() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut collection: PersistedCollection<String> =
            PersistedCollection::load(store.clone(), "items");

        store.fail_writes_with(StoreError::QuotaExceeded);
        collection.items_mut().push("a".to_string());
        let status = collection.persist();

        assert_eq!(status, PersistStatus::Unsaved(StoreError::QuotaExceeded));
        assert!(status.notice().unwrap().contains("quota"));
        assert!(collection.unsaved_notice().is_some());
        assert_eq!(collection.items().len(), 1);

        store.heal();
        assert!(collection.persist().is_saved());
        assert!(collection.unsaved_notice().is_none());
        assert_eq!(store.read("items").unwrap(), Some(r#"["a"]"#.to_string()));
    }
}
