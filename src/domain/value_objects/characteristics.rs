//! Attributes and the potencies derived from them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Names of the five attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeName {
    Might,
    Agility,
    Reason,
    Intuition,
    Presence,
}

impl AttributeName {
    pub const ALL: [AttributeName; 5] = [
        AttributeName::Might,
        AttributeName::Agility,
        AttributeName::Reason,
        AttributeName::Intuition,
        AttributeName::Presence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Might => "might",
            Self::Agility => "agility",
            Self::Reason => "reason",
            Self::Intuition => "intuition",
            Self::Presence => "presence",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeName::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown attribute: {}", s))
    }
}

/// The five base attributes. Values may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub might: i32,
    pub agility: i32,
    pub reason: i32,
    pub intuition: i32,
    pub presence: i32,
}

impl Attributes {
    pub fn new(might: i32, agility: i32, reason: i32, intuition: i32, presence: i32) -> Self {
        Self {
            might,
            agility,
            reason,
            intuition,
            presence,
        }
    }

    pub fn get(&self, name: AttributeName) -> i32 {
        match name {
            AttributeName::Might => self.might,
            AttributeName::Agility => self.agility,
            AttributeName::Reason => self.reason,
            AttributeName::Intuition => self.intuition,
            AttributeName::Presence => self.presence,
        }
    }

    pub fn set(&mut self, name: AttributeName, value: i32) {
        match name {
            AttributeName::Might => self.might = value,
            AttributeName::Agility => self.agility = value,
            AttributeName::Reason => self.reason = value,
            AttributeName::Intuition => self.intuition = value,
            AttributeName::Presence => self.presence = value,
        }
    }

    /// Highest of the five values, with no floor at zero
    pub fn highest(&self) -> i32 {
        self.might
            .max(self.agility)
            .max(self.reason)
            .max(self.intuition)
            .max(self.presence)
    }
}

/// Potency thresholds. Derived from attributes, never edited directly.
///
/// Held one width wider than attributes so the ladder never saturates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Potencies {
    pub weak: i64,
    pub average: i64,
    pub strong: i64,
}

impl Potencies {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let weak = i64::from(attributes.highest());
        Self {
            weak,
            average: weak + 1,
            strong: weak + 2,
        }
    }
}

impl Default for Potencies {
    /// The potencies of an all-zero attribute array
    fn default() -> Self {
        Self::from_attributes(&Attributes::default())
    }
}
