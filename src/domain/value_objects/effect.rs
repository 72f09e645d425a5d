//! Effects an ability use can apply to a character

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single selectable effect of an ability use
///
/// The use-ability dialog offers one checkbox per effect; only the checked
/// ones are handed to the resolution engine. Condition effects carry the raw
/// condition key from the ability record, which may name no known condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "condition")]
pub enum EffectKind {
    /// Deduct the ability's heroic resource cost
    SpendHeroic,
    /// Deduct the ability's surge cost
    SpendSurges,
    /// Apply the ability's stamina delta
    ApplyStamina,
    /// Switch a condition on
    AddCondition(String),
    /// Switch a condition off
    RemoveCondition(String),
}

impl EffectKind {
    pub fn add_condition(condition: impl Into<String>) -> Self {
        Self::AddCondition(condition.into())
    }

    pub fn remove_condition(condition: impl Into<String>) -> Self {
        Self::RemoveCondition(condition.into())
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpendHeroic => f.write_str("spend heroic resource"),
            Self::SpendSurges => f.write_str("spend surges"),
            Self::ApplyStamina => f.write_str("apply stamina"),
            Self::AddCondition(c) => write!(f, "add {}", c),
            Self::RemoveCondition(c) => write!(f, "remove {}", c),
        }
    }
}
