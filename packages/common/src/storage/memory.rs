use dashmap::DashMap;

use super::error::StorageError;
use super::traits::{KeyValueStore, validate_key};

/// In-memory key-value store. Contents are lost when it is dropped.
pub struct MemoryKvStore {
    values: DashMap<String, String>,
    max_size: u64,
}

impl MemoryKvStore {
    pub fn new(max_size: u64) -> Self {
        Self {
            values: DashMap::new(),
            max_size,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_VALUE_BYTES)
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        if value.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: value.len() as u64,
                limit: self.max_size,
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        Ok(self.values.remove(key).is_some())
    }
}
