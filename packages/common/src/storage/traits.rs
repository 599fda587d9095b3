use super::error::StorageError;

/// Longest key accepted by [`validate_key`].
pub const MAX_KEY_LEN: usize = 128;

/// Durable string-keyed storage of string values.
///
/// Every call is synchronous and completes before returning; there is no
/// batching and no transaction across keys.
pub trait KeyValueStore: Send + Sync {
    /// Retrieve the value for `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value for `key`.
    ///
    /// Returns `true` if a value was deleted, `false` if none existed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Check whether a value exists for `key`.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Reject keys that are empty, too long, or would escape a flat namespace.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let well_formed = !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if well_formed {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
