//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a map. Useful for testing, ephemeral runs, and simulating
//! write failures through [`InMemoryKeyValueStore::fail_writes_with`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::{KeyValueStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    values: HashMap<String, String>,
    write_failure: Option<StoreError>,
}

/// In-memory storage for persisted collections. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any configured failure.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.lock().values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every following `write` fail with `error`.
    pub fn fail_writes_with(&self, error: StoreError) {
        self.lock().write_failure = Some(error);
    }

    /// Stop failing writes.
    pub fn heal(&self) {
        self.lock().write_failure = None;
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave the map half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if let Some(err) = &inner.write_failure {
            return Err(err.clone());
        }
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
