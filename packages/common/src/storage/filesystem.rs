use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::StorageError;
use super::traits::{KeyValueStore, validate_key};

/// Filesystem-backed key-value store.
///
/// Each key is one file: `{base_path}/{key}.json`. Writes land in
/// `{base_path}/.tmp/` first and are renamed into place, so readers never see
/// a partially written value.
pub struct FilesystemKvStore {
    base_path: PathBuf,
    max_size: u64,
}

impl FilesystemKvStore {
    /// Create a new filesystem store, creating `base_path` if needed.
    pub fn new(base_path: PathBuf, max_size: u64) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_path)?;
        fs::create_dir_all(base_path.join(".tmp"))?;
        Ok(Self {
            base_path,
            max_size,
        })
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

impl KeyValueStore for FilesystemKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match fs::read(self.value_path(key)) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StorageError::NotUtf8(key.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if value.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: value.len() as u64,
                limit: self.max_size,
            });
        }

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, value) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, self.value_path(key)) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        match fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        Ok(self.value_path(key).try_exists()?)
    }
}
