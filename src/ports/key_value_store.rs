//! Key-Value Store Port - Interface for persisting whole collections.
//!
//! Each key holds one JSON document (the full worry list, the full solution
//! list, the settings record). Writers always replace the whole value.

/// Persisted keys.
pub mod keys {
    pub const WORRIES: &str = "worries";
    pub const PROBLEM_SOLUTIONS: &str = "problemSolutions";
    pub const WORRY_TIME: &str = "worryTime";
}

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage quota exceeded")]
    QuotaExceeded,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Port for a string-keyed, string-valued durable store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`.
    ///
    /// # Returns
    /// `None` if nothing has been written under `key`
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    /// Returns `StoreError` if the value could not be made durable
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_message() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(StoreError::from(err).to_string(), "IO error: denied");
    }
}
