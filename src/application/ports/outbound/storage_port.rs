//! Storage port - Local key-value store holding the sheet records
//!
//! Modelled on browser local storage: string values under string keys, one
//! writer, no transactions.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage lock poisoned: {0}")]
    Lock(String),
}

/// Key-value store port
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort: Send + Sync {
    /// Load the value stored under `key`, `None` if there is none
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
