//! Domain services - Pure rule operations over the sheet records
//!
//! None of these perform I/O. Each takes the records it changes explicitly
//! and reports what it did.

mod ability_resolution;
mod class_filter;
mod potency;
mod progression;

pub use ability_resolution::resolve_ability_use;
pub use class_filter::apply_class_change;
pub use potency::recompute_potencies;
pub use progression::{
    acquire_skill, add_project, add_victory, convert_victories_to_xp, remove_project,
    remove_skill,
};
