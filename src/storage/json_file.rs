//! File-backed storage: one JSON file per key under a data directory.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{Storage, StorageError};

/// Storage backend writing each key to `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(StorageError::Write)?;
        Ok(Self { dir })
    }

    /// Root directory holding the per-key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::Read(error)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(StorageError::Write)?;
        tracing::debug!(key, bytes = value.len(), "persisted value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StorageError::Write(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn get_missing_key_returns_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = JsonFileStorage::new(dir.path())?;

        assert_eq!(storage.get("products")?, None);

        Ok(())
    }

    #[test]
    fn set_then_get_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = JsonFileStorage::new(dir.path())?;

        storage.set("cart", "[]")?;

        assert_eq!(storage.get("cart")?.as_deref(), Some("[]"));
        assert!(dir.path().join("cart.json").exists());

        Ok(())
    }

    #[test]
    fn remove_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = JsonFileStorage::new(dir.path())?;

        storage.set("session", "{}")?;
        storage.remove("session")?;
        storage.remove("session")?;

        assert_eq!(storage.get("session")?, None);

        Ok(())
    }
}
