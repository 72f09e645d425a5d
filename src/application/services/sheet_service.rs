//! Sheet Service - The boundary the UI layer drives
//!
//! Each operation applies one user action to the in-memory sheet, writes the
//! affected record(s) back through the persistence gateway, and returns what
//! changed. The UI reads `character()` and `abilities()` afterwards to
//! re-render.
//!
//! Write failures are logged and absorbed: the in-memory sheet stays
//! authoritative and the next successful save catches storage up.

use tracing::{debug, error, info, instrument};

use crate::application::services::persistence_gateway::PersistenceGateway;
use crate::domain::aggregates::CharacterSheet;
use crate::domain::entities::{Ability, AbilityCatalog, Character, Project, Skill};
use crate::domain::events::{AbilityUseOutcome, RestOutcome};
use crate::domain::value_objects::{AbilityId, AttributeName, Attributes, Condition, EffectKind};

/// Which records an operation needs written back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dirty {
    Character,
    Abilities,
    Both,
}

pub struct SheetService {
    gateway: PersistenceGateway,
    sheet: CharacterSheet,
}

impl SheetService {
    /// Load the stored profile and build the sheet from it
    pub fn load(gateway: PersistenceGateway) -> Self {
        let (character, abilities) = gateway.load();
        let sheet = CharacterSheet::new(character, abilities);
        info!(
            character = %sheet.character().display_name(),
            abilities = sheet.abilities().len(),
            "Loaded character sheet"
        );
        Self { gateway, sheet }
    }

    pub fn character(&self) -> &Character {
        self.sheet.character()
    }

    pub fn abilities(&self) -> &AbilityCatalog {
        self.sheet.abilities()
    }

    fn persist(&self, dirty: Dirty) {
        if matches!(dirty, Dirty::Character | Dirty::Both) {
            if let Err(e) = self.gateway.save_character(self.sheet.character()) {
                error!(error = %e, "Failed to save character record");
            }
        }
        if matches!(dirty, Dirty::Abilities | Dirty::Both) {
            if let Err(e) = self.gateway.save_abilities(self.sheet.abilities()) {
                error!(error = %e, "Failed to save ability catalog");
            }
        }
    }

    // ========================================================================
    // Character edits
    // ========================================================================

    /// Apply a field edit from a sheet view
    ///
    /// Returns the abilities dropped if the edit changed the class.
    #[instrument(skip(self, edit))]
    pub fn edit_character(&mut self, edit: impl FnOnce(&mut Character)) -> Vec<Ability> {
        let previous_class = self.sheet.character().class_name.clone();
        let dropped = self.sheet.edit_character(edit);

        if self.sheet.character().class_name != previous_class {
            info!(
                from = %previous_class,
                to = %self.sheet.character().class_name,
                dropped = dropped.len(),
                "Class changed from sheet edit"
            );
            self.persist(Dirty::Both);
        } else {
            debug!("Character edited");
            self.persist(Dirty::Character);
        }
        dropped
    }

    #[instrument(skip(self))]
    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.sheet.set_attributes(attributes);
        debug!(potencies = ?self.sheet.character().potencies, "Attributes updated");
        self.persist(Dirty::Character);
    }

    #[instrument(skip(self))]
    pub fn set_attribute(&mut self, name: AttributeName, value: i32) {
        self.sheet.set_attribute(name, value);
        debug!(potencies = ?self.sheet.character().potencies, "Attribute updated");
        self.persist(Dirty::Character);
    }

    /// Change class and drop abilities the new class cannot use
    #[instrument(skip(self))]
    pub fn change_class(&mut self, new_class: &str) -> Vec<Ability> {
        let dropped = self.sheet.change_class(new_class);
        info!(
            class = %new_class,
            dropped = dropped.len(),
            remaining = self.sheet.abilities().len(),
            "Class changed"
        );
        self.persist(Dirty::Both);
        dropped
    }

    #[instrument(skip(self))]
    pub fn set_condition(&mut self, condition: Condition, active: bool) {
        self.sheet.set_condition(condition, active);
        self.persist(Dirty::Character);
    }

    #[instrument(skip(self))]
    pub fn toggle_condition(&mut self, condition: Condition) -> bool {
        let active = self.sheet.toggle_condition(condition);
        debug!(%condition, active, "Condition toggled");
        self.persist(Dirty::Character);
        active
    }

    // ========================================================================
    // Skills, projects and progression
    // ========================================================================

    /// Learn a skill; returns false for a duplicate or blank name
    #[instrument(skip(self))]
    pub fn acquire_skill(&mut self, name: &str, category: &str) -> bool {
        if !self.sheet.acquire_skill(name, category) {
            debug!("Skill not added");
            return false;
        }
        info!("Skill acquired");
        self.persist(Dirty::Character);
        true
    }

    #[instrument(skip(self))]
    pub fn remove_skill(&mut self, index: usize) -> Option<Skill> {
        let removed = self.sheet.remove_skill(index);
        match &removed {
            Some(skill) => {
                debug!(skill = %skill.name, "Skill removed");
                self.persist(Dirty::Character);
            }
            None => debug!("No skill at index"),
        }
        removed
    }

    #[instrument(skip(self, project), fields(project = %project.name))]
    pub fn add_project(&mut self, project: Project) {
        self.sheet.add_project(project);
        self.persist(Dirty::Character);
    }

    #[instrument(skip(self))]
    pub fn remove_project(&mut self, index: usize) -> Option<Project> {
        let removed = self.sheet.remove_project(index);
        if removed.is_some() {
            self.persist(Dirty::Character);
        } else {
            debug!("No project at index");
        }
        removed
    }

    #[instrument(skip(self))]
    pub fn add_victory(&mut self) -> u32 {
        let victories = self.sheet.add_victory();
        debug!(victories, "Victory recorded");
        self.persist(Dirty::Character);
        victories
    }

    /// Rest and convert every victory into experience
    #[instrument(skip(self))]
    pub fn rest_and_convert_victories(&mut self) -> RestOutcome {
        let outcome = self.sheet.convert_victories_to_xp();
        info!(
            gained = outcome.gained,
            xp = outcome.xp,
            "Rested and converted victories into XP"
        );
        self.persist(Dirty::Character);
        outcome
    }

    // ========================================================================
    // Abilities
    // ========================================================================

    /// Add an ability to the catalog; returns `None` for a blank name
    #[instrument(skip(self, ability), fields(name = %ability.name))]
    pub fn add_ability(&mut self, ability: Ability) -> Option<AbilityId> {
        let Some(id) = self.sheet.add_ability(ability) else {
            debug!("Ability without a name not added");
            return None;
        };
        info!(ability_id = %id, "Ability added");
        self.persist(Dirty::Abilities);
        Some(id)
    }

    #[instrument(skip(self))]
    pub fn remove_ability(&mut self, id: AbilityId) -> Option<Ability> {
        let removed = self.sheet.remove_ability(id);
        match &removed {
            Some(ability) => {
                info!(name = %ability.name, "Ability removed");
                self.persist(Dirty::Abilities);
            }
            None => debug!("No ability with that id"),
        }
        removed
    }

    /// Resolve an ability use with the effects the player checked
    ///
    /// All selected effects land on the record before a single write.
    #[instrument(skip(self, selected), fields(selected = selected.len()))]
    pub fn use_ability(
        &mut self,
        id: AbilityId,
        selected: &[EffectKind],
    ) -> Option<AbilityUseOutcome> {
        let Some(outcome) = self.sheet.use_ability(id, selected) else {
            debug!("No ability with that id");
            return None;
        };
        info!("{}", outcome.description());
        self.persist(Dirty::Character);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::ports::outbound::{MockStoragePort, StorageError, StoragePort};
    use crate::application::services::persistence_gateway::{
        StorageKeys, DEFAULT_ABILITIES_KEY, DEFAULT_CHARACTER_KEY,
    };
    use crate::domain::entities::ANY_CLASS;
    use crate::infrastructure::persistence::InMemoryStore;

    fn in_memory_service() -> (SheetService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let gateway = PersistenceGateway::new(store.clone(), StorageKeys::default());
        (SheetService::load(gateway), store)
    }

    fn stored_character(store: &InMemoryStore) -> Character {
        let raw = store
            .load(DEFAULT_CHARACTER_KEY)
            .expect("load should succeed")
            .expect("character was saved");
        serde_json::from_str(&raw).expect("stored character is valid")
    }

    fn stored_abilities(store: &InMemoryStore) -> AbilityCatalog {
        let raw = store
            .load(DEFAULT_ABILITIES_KEY)
            .expect("load should succeed")
            .expect("abilities were saved");
        serde_json::from_str(&raw).expect("stored catalog is valid")
    }

    /// Mock store with no stored records that expects exactly `saves` writes
    fn counting_mock(saves: usize) -> MockStoragePort {
        let mut storage = MockStoragePort::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().times(saves).returning(|_, _| Ok(()));
        storage
    }

    #[test]
    fn test_fresh_profile_starts_blank() {
        let (service, _) = in_memory_service();
        assert_eq!(service.character(), &Character::default());
        assert!(service.abilities().is_empty());
    }

    #[test]
    fn test_load_rederives_stale_potencies() {
        let store = Arc::new(InMemoryStore::new());
        store
            .save(
                DEFAULT_CHARACTER_KEY,
                r#"{"attributes": {"might": 3}, "potencies": {"weak": 0, "average": 0, "strong": 0}}"#,
            )
            .expect("seed should succeed");

        let service = SheetService::load(PersistenceGateway::new(store, StorageKeys::default()));
        assert_eq!(service.character().potencies.weak, 3);
        assert_eq!(service.character().potencies.strong, 5);
    }

    #[test]
    fn test_attribute_change_is_persisted_with_potencies() {
        let (mut service, store) = in_memory_service();
        service.set_attribute(AttributeName::Agility, 2);

        let saved = stored_character(&store);
        assert_eq!(saved.attributes.agility, 2);
        assert_eq!(saved.potencies.weak, 2);
        assert_eq!(saved.potencies.average, 3);
    }

    #[test]
    fn test_class_change_persists_filtered_catalog() {
        let (mut service, store) = in_memory_service();
        service.add_ability(Ability::new("Judgment").with_class_tag("Censor"));
        service.add_ability(Ability::new("Gouge").with_class_tag("Shadow"));
        service.add_ability(Ability::new("Shove").with_class_tag(ANY_CLASS));

        let dropped = service.change_class("Censor");

        assert_eq!(dropped.len(), 1);
        assert_eq!(service.character().class_name, "Censor");
        assert_eq!(stored_character(&store).class_name, "Censor");
        let names: Vec<_> = stored_abilities(&store)
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, vec!["Judgment", "Shove"]);
    }

    #[test]
    fn test_use_ability_writes_once() {
        let mut service = SheetService::load(PersistenceGateway::new(
            Arc::new(counting_mock(3)),
            StorageKeys::default(),
        ));
        // First write: the edit. Second: the new ability.
        service.edit_character(|c| {
            c.heroic_tokens = 2;
            c.surges = 2;
            c.stamina_current = 10;
            c.stamina_max = 10;
        });
        let id = service
            .add_ability(
                Ability::new("Overwhelm")
                    .with_costs(3, 5)
                    .with_stamina_delta(-20)
                    .adds_condition("Dazed")
                    .adds_condition("MadeUp"),
            )
            .expect("named ability is added");

        // Third: the whole ability use.
        let selected = service
            .abilities()
            .get(id)
            .map(Ability::offered_effects)
            .unwrap_or_default();
        let outcome = service.use_ability(id, &selected).expect("ability exists");

        let character = service.character();
        assert_eq!(character.heroic_tokens, 0);
        assert_eq!(character.surges, 0);
        assert_eq!(character.stamina_current, 0);
        assert!(character.conditions.is_active(Condition::Dazed));
        assert_eq!(outcome.changes.len(), 5);
    }

    #[test]
    fn test_no_ops_do_not_write() {
        let mut service = SheetService::load(PersistenceGateway::new(
            Arc::new(counting_mock(1)),
            StorageKeys::default(),
        ));

        assert!(service.acquire_skill("Stealth", "Intrigue"));
        assert!(!service.acquire_skill("Stealth", "Intrigue"));
        assert!(service.remove_skill(4).is_none());
        assert!(service.remove_project(0).is_none());
        assert!(service.remove_ability(AbilityId::new()).is_none());
        assert!(service.add_ability(Ability::new("")).is_none());
        assert!(service
            .use_ability(AbilityId::new(), &[EffectKind::SpendHeroic])
            .is_none());

        let stealth = service
            .character()
            .skills
            .iter()
            .filter(|s| s.name == "Stealth")
            .count();
        assert_eq!(stealth, 1);
    }

    #[test]
    fn test_write_failures_are_absorbed() {
        let mut storage = MockStoragePort::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().returning(|_, _| {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "quota exceeded",
            )))
        });
        let mut service =
            SheetService::load(PersistenceGateway::new(Arc::new(storage), StorageKeys::default()));

        service.add_victory();
        service.add_victory();
        let outcome = service.rest_and_convert_victories();

        assert_eq!(outcome.gained, 2);
        assert_eq!(service.character().xp, 2);
    }

    #[test]
    fn test_rest_with_no_victories() {
        let (mut service, store) = in_memory_service();
        let outcome = service.rest_and_convert_victories();
        assert_eq!(outcome, RestOutcome { gained: 0, xp: 0 });
        assert_eq!(stored_character(&store).xp, 0);
    }

    #[test]
    fn test_reload_sees_persisted_state() {
        let store = Arc::new(InMemoryStore::new());
        {
            let mut service =
                SheetService::load(PersistenceGateway::new(store.clone(), StorageKeys::default()));
            service.edit_character(|c| c.name = "Mirela".to_string());
            service.toggle_condition(Condition::Restrained);
            service.add_project(Project::new("Research the Crown", 90));
            service.add_ability(Ability::new("Vanish").with_class_tag("Shadow"));
        }

        let reloaded = SheetService::load(PersistenceGateway::new(store, StorageKeys::default()));
        assert_eq!(reloaded.character().name, "Mirela");
        assert!(reloaded.character().conditions.is_active(Condition::Restrained));
        assert_eq!(reloaded.character().projects.len(), 1);
        assert_eq!(reloaded.abilities().len(), 1);
    }
}
