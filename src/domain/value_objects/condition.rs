//! Status conditions
//!
//! The condition set is closed: a character always carries exactly these nine
//! flags, and sheet operations may only toggle them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the nine fixed status conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    Bleeding,
    Dazed,
    Frightened,
    Grabbed,
    Restrained,
    Slowed,
    Taunted,
    Weakened,
    Prone,
}

impl Condition {
    pub const ALL: [Condition; 9] = [
        Condition::Bleeding,
        Condition::Dazed,
        Condition::Frightened,
        Condition::Grabbed,
        Condition::Restrained,
        Condition::Slowed,
        Condition::Taunted,
        Condition::Weakened,
        Condition::Prone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bleeding => "Bleeding",
            Self::Dazed => "Dazed",
            Self::Frightened => "Frightened",
            Self::Grabbed => "Grabbed",
            Self::Restrained => "Restrained",
            Self::Slowed => "Slowed",
            Self::Taunted => "Taunted",
            Self::Weakened => "Weakened",
            Self::Prone => "Prone",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known condition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown condition: {0}")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    /// Condition keys are matched exactly, the same way they are stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// The closed condition map carried by every character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    #[serde(rename = "Bleeding")]
    bleeding: bool,
    #[serde(rename = "Dazed")]
    dazed: bool,
    #[serde(rename = "Frightened")]
    frightened: bool,
    #[serde(rename = "Grabbed")]
    grabbed: bool,
    #[serde(rename = "Restrained")]
    restrained: bool,
    #[serde(rename = "Slowed")]
    slowed: bool,
    #[serde(rename = "Taunted")]
    taunted: bool,
    #[serde(rename = "Weakened")]
    weakened: bool,
    #[serde(rename = "Prone")]
    prone: bool,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, condition: Condition) -> &mut bool {
        match condition {
            Condition::Bleeding => &mut self.bleeding,
            Condition::Dazed => &mut self.dazed,
            Condition::Frightened => &mut self.frightened,
            Condition::Grabbed => &mut self.grabbed,
            Condition::Restrained => &mut self.restrained,
            Condition::Slowed => &mut self.slowed,
            Condition::Taunted => &mut self.taunted,
            Condition::Weakened => &mut self.weakened,
            Condition::Prone => &mut self.prone,
        }
    }

    pub fn is_active(&self, condition: Condition) -> bool {
        match condition {
            Condition::Bleeding => self.bleeding,
            Condition::Dazed => self.dazed,
            Condition::Frightened => self.frightened,
            Condition::Grabbed => self.grabbed,
            Condition::Restrained => self.restrained,
            Condition::Slowed => self.slowed,
            Condition::Taunted => self.taunted,
            Condition::Weakened => self.weakened,
            Condition::Prone => self.prone,
        }
    }

    /// Set a condition flag, returning the previous value
    pub fn set(&mut self, condition: Condition, active: bool) -> bool {
        std::mem::replace(self.slot(condition), active)
    }

    /// Flip a condition flag, returning the new value
    pub fn toggle(&mut self, condition: Condition) -> bool {
        let slot = self.slot(condition);
        *slot = !*slot;
        *slot
    }

    /// Conditions currently in effect, in canonical order
    pub fn active(&self) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|c| self.is_active(*c))
            .collect()
    }
}
