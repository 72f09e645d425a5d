//! Class filter - prunes the ability catalog on a class change

use crate::domain::entities::{Ability, AbilityCatalog, Character};

/// Set the character's class and drop every ability the new class cannot use
///
/// Dropped abilities are gone for good; they are returned so the caller can
/// report them. Abilities tagged "Any" or with an empty tag always survive.
pub fn apply_class_change(
    character: &mut Character,
    catalog: &mut AbilityCatalog,
    new_class: &str,
) -> Vec<Ability> {
    character.class_name = new_class.to_string();
    catalog.retain_or_drain(|ability| ability.usable_by(new_class))
}
