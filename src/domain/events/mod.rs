//! Domain events - Descriptions of state changes within the domain

mod sheet_changes;

pub use sheet_changes::{AbilityUseOutcome, RestOutcome, SheetChange};
