//! Value objects - Immutable objects defined by their attributes

mod characteristics;
mod condition;
mod effect;
mod ids;

pub use characteristics::{AttributeName, Attributes, Potencies};
pub use condition::{Condition, Conditions, UnknownCondition};
pub use effect::EffectKind;
pub use ids::*;
