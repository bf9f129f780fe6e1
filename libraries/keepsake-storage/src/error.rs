/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing store could not be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Backing store refused the write (quota, permissions)
    #[error("Write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a write rejected error
    pub fn write_rejected(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WriteRejected {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for keepsake_core::KeepsakeError {
    fn from(err: StorageError) -> Self {
        keepsake_core::KeepsakeError::storage(err.to_string())
    }
}
