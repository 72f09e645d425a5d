//! Persistence Gateway - Reads and writes the two sheet records
//!
//! Loading never fails: a missing, unreadable or malformed record is replaced
//! by its default and the problem is logged. Saving overwrites the record
//! unconditionally.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ports::outbound::{StorageError, StoragePort};
use crate::domain::entities::{Ability, AbilityCatalog, Character};

/// Storage key used for the character record by default
pub const DEFAULT_CHARACTER_KEY: &str = "drawsteelCharacterV1";
/// Storage key used for the ability catalog by default
pub const DEFAULT_ABILITIES_KEY: &str = "drawsteelAbilitiesV1";

/// Keys the two records live under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub character: String,
    pub abilities: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            character: DEFAULT_CHARACTER_KEY.to_string(),
            abilities: DEFAULT_ABILITIES_KEY.to_string(),
        }
    }
}

pub struct PersistenceGateway {
    storage: Arc<dyn StoragePort>,
    keys: StorageKeys,
}

impl PersistenceGateway {
    pub fn new(storage: Arc<dyn StoragePort>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Load both records, substituting defaults for anything unusable
    pub fn load(&self) -> (Character, AbilityCatalog) {
        (self.load_character(), self.load_abilities())
    }

    pub fn load_character(&self) -> Character {
        let Some(raw) = self.read(&self.keys.character) else {
            return Character::default();
        };

        match serde_json::from_str::<Character>(&raw) {
            Ok(character) => character,
            Err(e) => {
                warn!(key = %self.keys.character, error = %e, "Malformed character record, starting from a blank sheet");
                Character::default()
            }
        }
    }

    /// Load the catalog, skipping entries that cannot be decoded
    pub fn load_abilities(&self) -> AbilityCatalog {
        let Some(raw) = self.read(&self.keys.abilities) else {
            return AbilityCatalog::new();
        };

        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %self.keys.abilities, error = %e, "Malformed ability catalog, starting empty");
                return AbilityCatalog::new();
            }
        };

        let abilities: Vec<Ability> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Ability>(entry) {
                Ok(ability) => Some(ability),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed ability entry");
                    None
                }
            })
            .collect();

        let (catalog, rekeyed) = AbilityCatalog::from_entries(abilities);
        if rekeyed > 0 {
            warn!(rekeyed, "Ability catalog held duplicate ids; assigned fresh ids");
        }
        catalog
    }

    pub fn save_character(&self, character: &Character) -> Result<(), StorageError> {
        let json = serde_json::to_string(character)?;
        self.storage.save(&self.keys.character, &json)?;
        debug!(key = %self.keys.character, bytes = json.len(), "Saved character record");
        Ok(())
    }

    pub fn save_abilities(&self, abilities: &AbilityCatalog) -> Result<(), StorageError> {
        let json = serde_json::to_string(abilities)?;
        self.storage.save(&self.keys.abilities, &json)?;
        debug!(key = %self.keys.abilities, count = abilities.len(), "Saved ability catalog");
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.load(key) {
            Ok(Some(raw)) => Some(raw),
            Ok(None) => {
                debug!(key, "No stored record, using defaults");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored record, using defaults");
                None
            }
        }
    }
}
