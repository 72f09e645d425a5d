//! Ability resolution - applies the selected effects of an ability use
//!
//! Each effect is a total function over the character record, so a
//! resolution can never fail partway and needs no rollback.

use std::collections::BTreeSet;

use crate::domain::entities::{Ability, Character};
use crate::domain::events::{AbilityUseOutcome, SheetChange};
use crate::domain::value_objects::{Condition, EffectKind};

/// Apply exactly the `selected` effects of `ability` to `character`
///
/// Effects the ability defines but the caller did not select are skipped.
/// Duplicate selections apply once.
pub fn resolve_ability_use<'a>(
    character: &mut Character,
    ability: &Ability,
    selected: impl IntoIterator<Item = &'a EffectKind>,
) -> AbilityUseOutcome {
    let selected: BTreeSet<&EffectKind> = selected.into_iter().collect();
    let mut outcome = AbilityUseOutcome::new(ability.id, &ability.name);

    for effect in selected {
        let change = match effect {
            EffectKind::SpendHeroic => spend_heroic(character, ability.cost_heroic),
            EffectKind::SpendSurges => spend_surges(character, ability.cost_surges),
            EffectKind::ApplyStamina => apply_stamina(character, ability.stamina_delta),
            EffectKind::AddCondition(name) => set_condition(character, name, true),
            EffectKind::RemoveCondition(name) => set_condition(character, name, false),
        };
        outcome.changes.push(change);
    }

    outcome
}

fn spend_heroic(character: &mut Character, cost: u32) -> SheetChange {
    let from = character.heroic_tokens;
    character.heroic_tokens = from.saturating_sub(cost);
    SheetChange::HeroicSpent {
        from,
        to: character.heroic_tokens,
    }
}

fn spend_surges(character: &mut Character, cost: u32) -> SheetChange {
    let from = character.surges;
    character.surges = from.saturating_sub(cost);
    SheetChange::SurgesSpent {
        from,
        to: character.surges,
    }
}

/// Clamp to `[0, stamina_max]`, or only to `[0, ..)` when no maximum is set
fn apply_stamina(character: &mut Character, delta: i32) -> SheetChange {
    let from = character.stamina_current;
    let mut next = from.saturating_add(delta).max(0);
    if character.stamina_max != 0 {
        next = next.min(character.stamina_max.max(0));
    }
    character.stamina_current = next;
    SheetChange::StaminaChanged { from, to: next }
}

fn set_condition(character: &mut Character, name: &str, active: bool) -> SheetChange {
    match name.parse::<Condition>() {
        Ok(condition) => {
            character.conditions.set(condition, active);
            SheetChange::ConditionSet { condition, active }
        }
        Err(_) => SheetChange::ConditionIgnored {
            name: name.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        Character {
            heroic_tokens: 3,
            surges: 2,
            stamina_current: 10,
            stamina_max: 10,
            ..Character::default()
        }
    }

    #[test]
    fn test_surge_spend_floors_at_zero() {
        let mut character = hero();
        let ability = Ability::new("Overload").with_costs(0, 5);

        let outcome = resolve_ability_use(&mut character, &ability, &[EffectKind::SpendSurges]);

        assert_eq!(character.surges, 0);
        assert_eq!(outcome.changes, vec![SheetChange::SurgesSpent { from: 2, to: 0 }]);
    }

    #[test]
    fn test_heroic_spend_floors_at_zero() {
        let mut character = hero();
        let ability = Ability::new("Heroic Strike").with_costs(5, 0);

        resolve_ability_use(&mut character, &ability, &[EffectKind::SpendHeroic]);
        assert_eq!(character.heroic_tokens, 0);

        let cheap = Ability::new("Jab").with_costs(1, 0);
        character.heroic_tokens = 3;
        resolve_ability_use(&mut character, &cheap, &[EffectKind::SpendHeroic]);
        assert_eq!(character.heroic_tokens, 2);
    }

    #[test]
    fn test_healing_clamps_to_max() {
        let mut character = hero();
        let ability = Ability::new("Second Wind").with_stamina_delta(5);

        resolve_ability_use(&mut character, &ability, &[EffectKind::ApplyStamina]);
        assert_eq!(character.stamina_current, 10);
    }

    #[test]
    fn test_damage_clamps_to_zero() {
        let mut character = hero();
        let ability = Ability::new("Blood Price").with_stamina_delta(-20);

        let outcome = resolve_ability_use(&mut character, &ability, &[EffectKind::ApplyStamina]);
        assert_eq!(character.stamina_current, 0);
        assert_eq!(outcome.changes, vec![SheetChange::StaminaChanged { from: 10, to: 0 }]);
    }

    #[test]
    fn test_unset_max_only_clamps_below() {
        let mut character = Character {
            stamina_current: 4,
            stamina_max: 0,
            ..Character::default()
        };
        let heal = Ability::new("Mend").with_stamina_delta(30);
        resolve_ability_use(&mut character, &heal, &[EffectKind::ApplyStamina]);
        assert_eq!(character.stamina_current, 34);

        let hurt = Ability::new("Bite").with_stamina_delta(-50);
        resolve_ability_use(&mut character, &hurt, &[EffectKind::ApplyStamina]);
        assert_eq!(character.stamina_current, 0);
    }

    #[test]
    fn test_unknown_condition_is_ignored() {
        let mut character = hero();
        let before = character.conditions;
        let ability = Ability::new("Odd Hex").adds_condition("MadeUp");

        let outcome = resolve_ability_use(
            &mut character,
            &ability,
            &[EffectKind::add_condition("MadeUp")],
        );

        assert_eq!(character.conditions, before);
        assert_eq!(
            outcome.changes,
            vec![SheetChange::ConditionIgnored {
                name: "MadeUp".to_string()
            }]
        );
        assert!(!outcome.changes[0].is_effective());
    }

    #[test]
    fn test_condition_add_and_remove() {
        let mut character = hero();
        character.conditions.set(Condition::Bleeding, true);
        let ability = Ability::new("Cauterize")
            .adds_condition("Weakened")
            .removes_condition("Bleeding");

        resolve_ability_use(
            &mut character,
            &ability,
            &[
                EffectKind::add_condition("Weakened"),
                EffectKind::remove_condition("Bleeding"),
            ],
        );

        assert!(character.conditions.is_active(Condition::Weakened));
        assert!(!character.conditions.is_active(Condition::Bleeding));
    }

    #[test]
    fn test_only_selected_effects_apply() {
        let mut character = hero();
        let ability = Ability::new("Judgment")
            .with_costs(2, 1)
            .with_stamina_delta(-4)
            .adds_condition("Frightened");

        let outcome = resolve_ability_use(&mut character, &ability, &[EffectKind::SpendHeroic]);

        assert_eq!(character.heroic_tokens, 1);
        assert_eq!(character.surges, 2);
        assert_eq!(character.stamina_current, 10);
        assert!(!character.conditions.is_active(Condition::Frightened));
        assert_eq!(outcome.changes.len(), 1);
    }

    #[test]
    fn test_empty_selection_changes_nothing() {
        let mut character = hero();
        let before = character.clone();
        let ability = Ability::new("Judgment").with_costs(2, 1).with_stamina_delta(-4);

        let outcome = resolve_ability_use(&mut character, &ability, Vec::<EffectKind>::new().iter());
        assert_eq!(character, before);
        assert!(outcome.changes.is_empty());
        assert_eq!(outcome.description(), "Used Judgment");
    }

    #[test]
    fn test_duplicate_selection_applies_once() {
        let mut character = hero();
        let ability = Ability::new("Jab").with_costs(1, 0);

        resolve_ability_use(
            &mut character,
            &ability,
            &[EffectKind::SpendHeroic, EffectKind::SpendHeroic],
        );
        assert_eq!(character.heroic_tokens, 2);
    }

    #[test]
    fn test_all_effects_in_one_use() {
        let mut character = hero();
        let ability = Ability::new("Finishing Blow")
            .with_costs(3, 2)
            .with_stamina_delta(-3)
            .adds_condition("Prone");

        let outcome = resolve_ability_use(&mut character, &ability, &ability.offered_effects());

        assert_eq!(character.heroic_tokens, 0);
        assert_eq!(character.surges, 0);
        assert_eq!(character.stamina_current, 7);
        assert!(character.conditions.is_active(Condition::Prone));
        assert_eq!(outcome.changes.len(), 4);
        assert!(outcome.description().contains("gained Prone"));
    }
}
