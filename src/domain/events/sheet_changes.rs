//! Sheet change descriptors
//!
//! Rule operations report what they changed so the UI layer can decide what
//! to re-render, and so logs can describe each user action.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AbilityId, Condition};

/// A single field-level change made by a rule operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SheetChange {
    /// Heroic resource tokens were spent
    HeroicSpent { from: u32, to: u32 },
    /// Surges were spent
    SurgesSpent { from: u32, to: u32 },
    /// Current stamina moved
    StaminaChanged { from: i32, to: i32 },
    /// A condition flag was written
    ConditionSet { condition: Condition, active: bool },
    /// A condition effect named no known condition and was skipped
    ConditionIgnored { name: String },
}

impl SheetChange {
    /// Whether the record actually differs after this change
    pub fn is_effective(&self) -> bool {
        match self {
            Self::HeroicSpent { from, to } | Self::SurgesSpent { from, to } => from != to,
            Self::StaminaChanged { from, to } => from != to,
            Self::ConditionSet { .. } => true,
            Self::ConditionIgnored { .. } => false,
        }
    }
}

/// Result of resolving one ability use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityUseOutcome {
    pub ability_id: AbilityId,
    pub ability_name: String,
    pub changes: Vec<SheetChange>,
}

impl AbilityUseOutcome {
    pub fn new(ability_id: AbilityId, ability_name: impl Into<String>) -> Self {
        Self {
            ability_id,
            ability_name: ability_name.into(),
            changes: Vec::new(),
        }
    }

    /// Human-readable summary for a confirmation message
    pub fn description(&self) -> String {
        let parts: Vec<String> = self
            .changes
            .iter()
            .filter_map(|change| match change {
                SheetChange::HeroicSpent { from, to } => {
                    Some(format!("heroic resource {} -> {}", from, to))
                }
                SheetChange::SurgesSpent { from, to } => Some(format!("surges {} -> {}", from, to)),
                SheetChange::StaminaChanged { from, to } => {
                    Some(format!("stamina {} -> {}", from, to))
                }
                SheetChange::ConditionSet { condition, active } => Some(format!(
                    "{} {}",
                    if *active { "gained" } else { "lost" },
                    condition
                )),
                SheetChange::ConditionIgnored { .. } => None,
            })
            .collect();

        if parts.is_empty() {
            format!("Used {}", self.ability_name)
        } else {
            format!("Used {}: {}", self.ability_name, parts.join(", "))
        }
    }
}

/// Result of resting and converting victories into experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestOutcome {
    pub gained: u32,
    pub xp: u32,
}
