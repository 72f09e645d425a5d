//! Domain layer - Core rules logic with no I/O
//!
//! This layer contains:
//! - Entities: Character, Ability, AbilityCatalog
//! - Value Objects: Attributes, Potencies, Conditions, EffectKind, ids
//! - Aggregates: the CharacterSheet aggregate root
//! - Domain Events: Change descriptors returned by rule operations
//! - Domain Services: Potency derivation, class filter, ability resolution

pub mod aggregates;
pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;
