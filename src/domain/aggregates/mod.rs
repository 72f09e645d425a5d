//! Aggregates - Cluster of domain objects treated as a single unit

pub mod character_sheet;

pub use character_sheet::CharacterSheet;
