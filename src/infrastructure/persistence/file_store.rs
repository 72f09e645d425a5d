//! JSON-file key-value store
//!
//! All keys live in a single pretty-printed JSON object on disk, cached in
//! memory. Every write rewrites the whole file.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::application::ports::outbound::{StorageError, StoragePort};

pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty and will be replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!(path = ?path, "Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(path = ?path, "Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("File storage initialized at: {:?}", path);

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(cache)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl StoragePort for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let cache = self
            .cache
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(cache.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self
            .cache
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache)
    }
}
