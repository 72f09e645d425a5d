//! Character entity - the single hero described by the sheet

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Attributes, Conditions, Potencies};

/// The hero record edited by every sheet view
///
/// Every field defaults when absent from a stored record, so records written
/// by earlier versions of the sheet still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    // Identity
    pub name: String,
    pub ancestry: String,
    pub career: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub subclass: String,

    pub culture: Culture,

    // Progression
    pub level: u32,
    pub wealth: u32,
    pub renown: u32,
    pub xp: u32,
    pub victories: u32,

    pub attributes: Attributes,
    /// Derived from `attributes`; see `domain::services::recompute_potencies`
    pub potencies: Potencies,

    // Stamina and recoveries
    pub stamina_current: i32,
    pub stamina_temp: i32,
    pub stamina_max: i32,
    pub winded: i32,
    pub recoveries: i32,
    pub stamina_per_recovery: i32,
    pub recoveries_max: i32,
    pub dying_range: String,

    // Heroic resource and surges
    pub heroic_name: String,
    pub heroic_tokens: u32,
    pub surges: u32,

    pub modifiers: Modifiers,
    pub conditions: Conditions,

    // Narrative
    pub career_detail: CareerDetail,
    pub complication: Complication,
    pub culture_notes: String,
    pub perks: String,
    pub titles: String,
    pub ancestry_traits: String,
    pub class_features: String,
    pub inventory: String,

    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: String::new(),
            ancestry: String::new(),
            career: String::new(),
            class_name: String::new(),
            subclass: String::new(),
            culture: Culture::default(),
            level: 1,
            wealth: 0,
            renown: 0,
            xp: 0,
            victories: 0,
            attributes: Attributes::default(),
            potencies: Potencies::default(),
            stamina_current: 0,
            stamina_temp: 0,
            stamina_max: 0,
            winded: 0,
            recoveries: 0,
            stamina_per_recovery: 0,
            recoveries_max: 0,
            dying_range: String::new(),
            heroic_name: String::new(),
            heroic_tokens: 0,
            surges: 0,
            modifiers: Modifiers::default(),
            conditions: Conditions::default(),
            career_detail: CareerDetail::default(),
            complication: Complication::default(),
            culture_notes: String::new(),
            perks: String::new(),
            titles: String::new(),
            ancestry_traits: String::new(),
            class_features: String::new(),
            inventory: String::new(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Display name, falling back for a blank sheet
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.name == name)
    }
}

/// Cultural background
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
    pub environment: String,
    pub organization: String,
    pub upbringing: String,
    pub languages: String,
}

/// Passive modifiers. Informational only; no rule applies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Modifiers {
    pub augmentation: bool,
    pub enchantment: bool,
    pub kit: bool,
    pub prayer: bool,
    pub ward: bool,

    pub weapon_implement: String,
    pub ranged_dmg_mod: i32,
    pub melee_dmg_mod: i32,
    pub speed_mod: i32,
    pub disengage_mod: i32,
    pub stability_mod: i32,
    pub stamina_mod: i32,
    pub armor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerDetail {
    pub name: String,
    pub benefit: String,
    pub inciting_incident: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Complication {
    pub name: String,
    pub benefit: String,
    pub drawback: String,
}

/// A learned skill; names are unique within a character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub note: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            note: String::new(),
        }
    }
}

/// A downtime project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub assigned_to: String,
    pub roll_characteristic: String,
    pub goal_current: u32,
    pub goal_target: u32,
}

impl Project {
    pub fn new(name: impl Into<String>, goal_target: u32) -> Self {
        Self {
            name: name.into(),
            goal_target,
            ..Self::default()
        }
    }

    pub fn with_assignee(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = assigned_to.into();
        self
    }

    pub fn with_roll_characteristic(mut self, characteristic: impl Into<String>) -> Self {
        self.roll_characteristic = characteristic.into();
        self
    }
}
