//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which `KeyValueStore` backs the repositories.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `data_dir`
    #[default]
    File,
    /// Nothing survives a restart
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
