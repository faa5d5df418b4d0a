//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - durable string store behind the repositories

mod key_value_store;

pub use key_value_store::{keys, KeyValueStore, StoreError};
