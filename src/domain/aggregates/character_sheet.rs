//! Character Sheet Aggregate - The hero record plus its ability catalog
//!
//! All modifications to sheet data should go through this aggregate root so
//! that derived potencies and the class/catalog relationship stay consistent.

use crate::domain::entities::{Ability, AbilityCatalog, Character, Project, Skill};
use crate::domain::events::{AbilityUseOutcome, RestOutcome};
use crate::domain::services;
use crate::domain::value_objects::{
    AbilityId, AttributeName, Attributes, Condition, EffectKind,
};

/// The Character Sheet Aggregate Root
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterSheet {
    character: Character,
    abilities: AbilityCatalog,
}

impl CharacterSheet {
    /// Assemble a sheet from loaded records, re-deriving potencies
    pub fn new(mut character: Character, abilities: AbilityCatalog) -> Self {
        services::recompute_potencies(&mut character);
        Self {
            character,
            abilities,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn abilities(&self) -> &AbilityCatalog {
        &self.abilities
    }

    pub fn find_ability(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities.get(id)
    }

    // ========================================================================
    // Character edits
    // ========================================================================

    /// Apply a free-form field edit from a sheet view
    ///
    /// Potencies are re-derived afterwards. A class edited here goes through
    /// the class filter like any other class change; the dropped abilities
    /// are returned.
    pub fn edit_character(&mut self, edit: impl FnOnce(&mut Character)) -> Vec<Ability> {
        let previous_class = self.character.class_name.clone();
        edit(&mut self.character);

        let dropped = if self.character.class_name != previous_class {
            let new_class = self.character.class_name.clone();
            services::apply_class_change(&mut self.character, &mut self.abilities, &new_class)
        } else {
            Vec::new()
        };

        services::recompute_potencies(&mut self.character);
        dropped
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.character.attributes = attributes;
        services::recompute_potencies(&mut self.character);
    }

    pub fn set_attribute(&mut self, name: AttributeName, value: i32) {
        self.character.attributes.set(name, value);
        services::recompute_potencies(&mut self.character);
    }

    /// Change class, dropping abilities the new class cannot use
    pub fn change_class(&mut self, new_class: &str) -> Vec<Ability> {
        services::apply_class_change(&mut self.character, &mut self.abilities, new_class)
    }

    pub fn set_condition(&mut self, condition: Condition, active: bool) {
        self.character.conditions.set(condition, active);
    }

    pub fn toggle_condition(&mut self, condition: Condition) -> bool {
        self.character.conditions.toggle(condition)
    }

    // ========================================================================
    // Skills, projects and progression
    // ========================================================================

    pub fn acquire_skill(&mut self, name: &str, category: &str) -> bool {
        services::acquire_skill(&mut self.character, name, category)
    }

    pub fn remove_skill(&mut self, index: usize) -> Option<Skill> {
        services::remove_skill(&mut self.character, index)
    }

    pub fn add_project(&mut self, project: Project) {
        services::add_project(&mut self.character, project);
    }

    pub fn remove_project(&mut self, index: usize) -> Option<Project> {
        services::remove_project(&mut self.character, index)
    }

    pub fn add_victory(&mut self) -> u32 {
        services::add_victory(&mut self.character)
    }

    pub fn convert_victories_to_xp(&mut self) -> RestOutcome {
        services::convert_victories_to_xp(&mut self.character)
    }

    // ========================================================================
    // Abilities
    // ========================================================================

    /// Add an ability under a fresh id; a blank class tag becomes "Any"
    ///
    /// Abilities without a name are not added.
    pub fn add_ability(&mut self, mut ability: Ability) -> Option<AbilityId> {
        ability.name = ability.name.trim().to_string();
        if ability.name.is_empty() {
            return None;
        }
        if ability.class_tag.trim().is_empty() {
            ability.class_tag = crate::domain::entities::ANY_CLASS.to_string();
        }
        Some(self.abilities.push(ability))
    }

    pub fn remove_ability(&mut self, id: AbilityId) -> Option<Ability> {
        self.abilities.remove(id)
    }

    /// Resolve a use of the catalog ability `id` with the selected effects
    ///
    /// Returns `None` when no ability has that id.
    pub fn use_ability(
        &mut self,
        id: AbilityId,
        selected: &[EffectKind],
    ) -> Option<AbilityUseOutcome> {
        let ability = self.abilities.get(id)?;
        Some(services::resolve_ability_use(
            &mut self.character,
            ability,
            selected,
        ))
    }
}
