//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use directories::ProjectDirs;

use crate::application::services::{StorageKeys, DEFAULT_ABILITIES_KEY, DEFAULT_CHARACTER_KEY};

/// Where the sheet records are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON key-value file at the given path
    File(PathBuf),
    /// Process-local map; nothing survives a restart
    Memory,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    /// Storage key for the character record
    pub character_key: String,
    /// Storage key for the ability catalog
    pub abilities_key: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage = match var("DRAWSTEEL_STORAGE_BACKEND").as_deref() {
            None | Some("file") => StorageBackend::File(
                var("DRAWSTEEL_STORAGE_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_storage_path),
            ),
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!(
                "DRAWSTEEL_STORAGE_BACKEND must be 'file' or 'memory', got '{}'",
                other
            ),
        };

        Ok(Self {
            storage,
            character_key: var("DRAWSTEEL_CHARACTER_KEY")
                .unwrap_or_else(|| DEFAULT_CHARACTER_KEY.to_string()),
            abilities_key: var("DRAWSTEEL_ABILITIES_KEY")
                .unwrap_or_else(|| DEFAULT_ABILITIES_KEY.to_string()),
        })
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            character: self.character_key.clone(),
            abilities: self.abilities_key.clone(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("io", "drawsteel", "sheet") {
        dirs.config_dir().join("storage.json")
    } else {
        PathBuf::from("drawsteel_storage.json")
    }
}
