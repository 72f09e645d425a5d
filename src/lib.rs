//! Draw Steel character sheet - rules core and local profile storage
//!
//! The crate holds everything below the sheet's views:
//! - the character and ability records and their invariants
//! - potency derivation, the class filter and ability resolution
//! - a persistence gateway over a local key-value store
//! - the sheet service a UI layer drives, plus the builder wizard

pub mod application;
pub mod domain;
pub mod infrastructure;
