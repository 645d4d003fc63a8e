//! In-memory storage backend for tests.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::{Storage, StorageError};

/// Storage backend holding all values in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn set_get_remove() -> TestResult {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get("purchases")?, None);

        storage.set("purchases", "[]")?;
        assert_eq!(storage.get("purchases")?.as_deref(), Some("[]"));

        storage.remove("purchases")?;
        assert_eq!(storage.get("purchases")?, None);

        Ok(())
    }
}
