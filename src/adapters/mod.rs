//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - `KeyValueStore` backends (files on disk, in-memory)
//! - `http` - axum JSON API over `WorryApp`

pub mod http;
pub mod storage;
