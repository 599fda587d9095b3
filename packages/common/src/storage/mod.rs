mod error;
mod traits;

pub mod filesystem;
pub mod memory;

pub use error::StorageError;
pub use traits::{KeyValueStore, MAX_KEY_LEN, validate_key};

/// Default per-value size limit, matching the usual browser local-storage quota.
pub const DEFAULT_MAX_VALUE_BYTES: u64 = 5 * 1024 * 1024;
