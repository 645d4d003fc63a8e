//! Persisted key-value storage.
//!
//! Each store serializes its full record list into a single value under a
//! well-known key, the way a browser would use local storage. Writes are
//! synchronous; there is no batching.

use mockall::automock;
use thiserror::Error;

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read persisted value")]
    Read(#[source] std::io::Error),

    #[error("failed to write persisted value")]
    Write(#[source] std::io::Error),
}

/// String key to serialized string value storage.
#[automock]
pub trait Storage: Send + Sync {
    /// Fetch the value under `key`, or `None` if nothing was ever stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop the value under `key`; absent keys are a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
