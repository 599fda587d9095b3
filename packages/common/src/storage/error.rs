use std::fmt;

/// Errors that can occur during key-value storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred.
    Io(std::io::Error),
    /// The key contains characters outside `[A-Za-z0-9_.-]` or is too long.
    InvalidKey(String),
    /// The value exceeds the configured size limit.
    SizeLimitExceeded { actual: u64, limit: u64 },
    /// A stored value is not valid UTF-8.
    NotUtf8(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage IO error: {err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key: {key:?}"),
            Self::SizeLimitExceeded { actual, limit } => {
                write!(f, "value exceeds size limit ({actual} > {limit} bytes)")
            }
            Self::NotUtf8(key) => write!(f, "stored value for {key:?} is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
