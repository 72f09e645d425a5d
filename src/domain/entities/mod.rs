//! Domain entities - Core business objects of the sheet

mod ability;
mod character;

pub use ability::{Ability, AbilityCatalog, ANY_CLASS};
pub use character::{CareerDetail, Character, Complication, Culture, Modifiers, Project, Skill};
