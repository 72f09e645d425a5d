//! Potency derivation

use crate::domain::entities::Character;
use crate::domain::value_objects::Potencies;

/// Recompute potencies from the character's attributes
///
/// `weak` is the highest attribute, `average` and `strong` step up by one.
/// Idempotent. Returns true when the stored potencies changed.
pub fn recompute_potencies(character: &mut Character) -> bool {
    let derived = Potencies::from_attributes(&character.attributes);
    let changed = character.potencies != derived;
    character.potencies = derived;
    changed
}
