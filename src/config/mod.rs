//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WORRY_TIME` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use worry_time::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod server;
mod storage;
mod worry_time;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};
pub use worry_time::WorryTimeConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Where worries and solutions are persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Worry-time slot used until the user picks one
    #[serde(default)]
    pub worry_time: WorryTimeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WORRY_TIME` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WORRY_TIME__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WORRY_TIME__STORAGE__DATA_DIR=/var/lib/worry` -> `storage.data_dir`
    /// - `WORRY_TIME__WORRY_TIME__HOUR=19` -> `worry_time.hour = 19`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WORRY_TIME")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.worry_time.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "WORRY_TIME__SERVER__PORT",
        "WORRY_TIME__SERVER__ENVIRONMENT",
        "WORRY_TIME__STORAGE__BACKEND",
        "WORRY_TIME__STORAGE__DATA_DIR",
        "WORRY_TIME__WORRY_TIME__HOUR",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, PathBuf::from("./data"));
        assert_eq!(config.worry_time.hour, 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORRY_TIME__SERVER__PORT", "3000");
        env::set_var("WORRY_TIME__STORAGE__BACKEND", "memory");
        env::set_var("WORRY_TIME__WORRY_TIME__HOUR", "9");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.worry_time.hour, 9);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORRY_TIME__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_validate_catches_bad_worry_time() {
        let mut config = AppConfig::default();
        config.worry_time.minute = 75;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWorryTime(_))
        ));
    }
}
