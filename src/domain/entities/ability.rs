//! Ability entity and the ordered ability catalog

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AbilityId, EffectKind};

/// Class tag that matches every class. Case-sensitive.
pub const ANY_CLASS: &str = "Any";

/// A usable ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    #[serde(rename = "type")]
    pub ability_type: String,
    pub action_type: String,
    #[serde(alias = "desc")]
    pub notes: String,
    pub class_tag: String,

    pub cost_heroic: u32,
    pub cost_surges: u32,
    /// Negative deals damage, positive heals
    pub stamina_delta: i32,
    pub conditions_add: BTreeSet<String>,
    pub conditions_remove: BTreeSet<String>,
}

impl Default for Ability {
    fn default() -> Self {
        Self {
            id: AbilityId::new(),
            name: String::new(),
            ability_type: String::new(),
            action_type: String::new(),
            notes: String::new(),
            class_tag: ANY_CLASS.to_string(),
            cost_heroic: 0,
            cost_surges: 0,
            stamina_delta: 0,
            conditions_add: BTreeSet::new(),
            conditions_remove: BTreeSet::new(),
        }
    }
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_class_tag(mut self, class_tag: impl Into<String>) -> Self {
        self.class_tag = class_tag.into();
        self
    }

    pub fn with_costs(mut self, heroic: u32, surges: u32) -> Self {
        self.cost_heroic = heroic;
        self.cost_surges = surges;
        self
    }

    pub fn with_stamina_delta(mut self, delta: i32) -> Self {
        self.stamina_delta = delta;
        self
    }

    pub fn adds_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions_add.insert(condition.into());
        self
    }

    pub fn removes_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions_remove.insert(condition.into());
        self
    }

    /// Whether a character of `class_name` keeps this ability
    ///
    /// An explicit "Any" tag matches every class. An empty tag is also kept:
    /// stored records with no tag have always been treated as unrestricted.
    /// A whitespace-only tag is not empty and matches no class.
    pub fn usable_by(&self, class_name: &str) -> bool {
        self.class_tag.is_empty() || self.class_tag == ANY_CLASS || self.class_tag == class_name
    }

    /// Effects a use-ability prompt should offer for this ability
    pub fn offered_effects(&self) -> Vec<EffectKind> {
        let mut effects = Vec::new();
        if self.cost_heroic > 0 {
            effects.push(EffectKind::SpendHeroic);
        }
        if self.cost_surges > 0 {
            effects.push(EffectKind::SpendSurges);
        }
        if self.stamina_delta != 0 {
            effects.push(EffectKind::ApplyStamina);
        }
        effects.extend(self.conditions_add.iter().cloned().map(EffectKind::AddCondition));
        effects.extend(
            self.conditions_remove
                .iter()
                .cloned()
                .map(EffectKind::RemoveCondition),
        );
        effects
    }
}

/// Ordered ability catalog with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityCatalog {
    entries: Vec<Ability>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw entries, re-keying any duplicate id
    ///
    /// Returns the catalog and the number of entries that were re-keyed.
    pub fn from_entries(entries: Vec<Ability>) -> (Self, usize) {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut rekeyed = 0;
        let mut catalog = Self {
            entries: Vec::with_capacity(entries.len()),
        };
        for mut ability in entries {
            if !seen.insert(ability.id) {
                ability.id = catalog.fresh_id(&seen);
                seen.insert(ability.id);
                rekeyed += 1;
            }
            catalog.entries.push(ability);
        }
        (catalog, rekeyed)
    }

    fn fresh_id(&self, taken: &HashSet<AbilityId>) -> AbilityId {
        loop {
            let id = AbilityId::new();
            if !taken.contains(&id) && !self.contains(id) {
                return id;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Ability] {
        &self.entries
    }

    pub fn contains(&self, id: AbilityId) -> bool {
        self.entries.iter().any(|a| a.id == id)
    }

    pub fn get(&self, id: AbilityId) -> Option<&Ability> {
        self.entries.iter().find(|a| a.id == id)
    }

    /// Append an ability under a fresh id, returning that id
    pub fn push(&mut self, mut ability: Ability) -> AbilityId {
        ability.id = self.fresh_id(&HashSet::new());
        let id = ability.id;
        self.entries.push(ability);
        id
    }

    /// Remove the ability with `id`, if present
    pub fn remove(&mut self, id: AbilityId) -> Option<Ability> {
        let pos = self.entries.iter().position(|a| a.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Keep only abilities matching `keep`, returning the dropped ones in order
    pub fn retain_or_drain(&mut self, mut keep: impl FnMut(&Ability) -> bool) -> Vec<Ability> {
        let (kept, dropped) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|a| keep(a));
        self.entries = kept;
        dropped
    }
}

impl<'a> IntoIterator for &'a AbilityCatalog {
    type Item = &'a Ability;
    type IntoIter = std::slice::Iter<'a, Ability>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
