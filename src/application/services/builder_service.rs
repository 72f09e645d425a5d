//! Builder Wizard - Step-by-step hero creation over the sheet service
//!
//! The wizard only tracks which step is showing. Every confirmation goes
//! through `SheetService`, so the class filter and potency derivation run
//! exactly as they do on the main sheet.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::services::sheet_service::SheetService;
use crate::domain::entities::{Ability, Character};
use crate::domain::services::recompute_potencies;
use crate::domain::value_objects::{Attributes, Potencies};

/// Builder steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuilderStep {
    #[default]
    Ancestry,
    Culture,
    Career,
    Class,
    Characteristics,
    Review,
}

impl BuilderStep {
    pub const ALL: [BuilderStep; 6] = [
        BuilderStep::Ancestry,
        BuilderStep::Culture,
        BuilderStep::Career,
        BuilderStep::Class,
        BuilderStep::Characteristics,
        BuilderStep::Review,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Ancestry => "Ancestry",
            Self::Culture => "Culture",
            Self::Career => "Career",
            Self::Class => "Class",
            Self::Characteristics => "Characteristics",
            Self::Review => "Review",
        }
    }
}

/// Read-only confirmation summary shown on the review step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderSummary {
    pub name: String,
    pub ancestry: String,
    pub career: String,
    pub class_name: String,
    pub subclass: String,
    pub attributes: Attributes,
    pub potencies: Potencies,
    pub ability_count: usize,
}

impl BuilderSummary {
    fn from_character(character: &Character, ability_count: usize) -> Self {
        // Work on a copy so the summary never shows stale potencies.
        let mut character = character.clone();
        recompute_potencies(&mut character);
        Self {
            name: character.display_name().to_string(),
            ancestry: character.ancestry,
            career: character.career,
            class_name: character.class_name,
            subclass: character.subclass,
            attributes: character.attributes,
            potencies: character.potencies,
            ability_count,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuilderWizard {
    step: BuilderStep,
}

impl BuilderWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BuilderStep {
        self.step
    }

    pub fn is_first(&self) -> bool {
        self.step.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.step.index() == BuilderStep::ALL.len() - 1
    }

    /// Move forward one step, staying on the last one
    pub fn next(&mut self) -> BuilderStep {
        let index = (self.step.index() + 1).min(BuilderStep::ALL.len() - 1);
        self.step = BuilderStep::ALL[index];
        debug!(step = self.step.title(), "Builder advanced");
        self.step
    }

    /// Move back one step, staying on the first one
    pub fn previous(&mut self) -> BuilderStep {
        let index = self.step.index().saturating_sub(1);
        self.step = BuilderStep::ALL[index];
        debug!(step = self.step.title(), "Builder went back");
        self.step
    }

    pub fn go_to(&mut self, step: BuilderStep) {
        self.step = step;
    }

    /// Confirm the class choice; abilities the class cannot use are dropped
    #[instrument(skip(self, sheet))]
    pub fn confirm_class(&mut self, sheet: &mut SheetService, new_class: &str) -> Vec<Ability> {
        let dropped = sheet.change_class(new_class);
        self.step = BuilderStep::Class;
        self.next();
        dropped
    }

    /// Confirm the characteristic array and re-derive potencies
    #[instrument(skip(self, sheet))]
    pub fn confirm_characteristics(
        &mut self,
        sheet: &mut SheetService,
        attributes: Attributes,
    ) -> Potencies {
        sheet.set_attributes(attributes);
        self.step = BuilderStep::Characteristics;
        self.next();
        sheet.character().potencies
    }

    pub fn summary(&self, sheet: &SheetService) -> BuilderSummary {
        BuilderSummary::from_character(sheet.character(), sheet.abilities().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::services::persistence_gateway::{PersistenceGateway, StorageKeys};
    use crate::domain::entities::ANY_CLASS;
    use crate::infrastructure::persistence::InMemoryStore;

    fn service() -> SheetService {
        SheetService::load(PersistenceGateway::new(
            Arc::new(InMemoryStore::new()),
            StorageKeys::default(),
        ))
    }

    #[test]
    fn test_navigation_saturates_at_both_ends() {
        let mut wizard = BuilderWizard::new();
        assert!(wizard.is_first());
        assert_eq!(wizard.previous(), BuilderStep::Ancestry);

        for _ in 0..10 {
            wizard.next();
        }
        assert!(wizard.is_last());
        assert_eq!(wizard.step(), BuilderStep::Review);
        assert_eq!(wizard.previous(), BuilderStep::Characteristics);
    }

    #[test]
    fn test_confirm_class_filters_catalog() {
        let mut sheet = service();
        sheet.add_ability(Ability::new("Whirlwind").with_class_tag("Fury"));
        sheet.add_ability(Ability::new("Holy Light").with_class_tag("Conduit"));
        sheet.add_ability(Ability::new("Shove").with_class_tag(ANY_CLASS));

        let mut wizard = BuilderWizard::new();
        wizard.go_to(BuilderStep::Class);
        let dropped = wizard.confirm_class(&mut sheet, "Fury");

        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].name, "Holy Light");
        assert_eq!(sheet.character().class_name, "Fury");
        assert_eq!(wizard.step(), BuilderStep::Characteristics);
    }

    #[test]
    fn test_confirm_characteristics_and_summary() {
        let mut sheet = service();
        sheet.edit_character(|c| {
            c.name = "Tov".to_string();
            c.ancestry = "Dwarf".to_string();
        });

        let mut wizard = BuilderWizard::new();
        let potencies =
            wizard.confirm_characteristics(&mut sheet, Attributes::new(2, -1, 1, 0, 1));
        assert_eq!(potencies.weak, 2);
        assert_eq!(wizard.step(), BuilderStep::Review);

        let summary = wizard.summary(&sheet);
        assert_eq!(summary.name, "Tov");
        assert_eq!(summary.ancestry, "Dwarf");
        assert_eq!(summary.potencies.strong, 4);
        assert_eq!(summary.ability_count, 0);
    }

    #[test]
    fn test_summary_for_blank_sheet() {
        let sheet = service();
        let summary = BuilderWizard::new().summary(&sheet);
        assert_eq!(summary.name, "Unnamed");
        assert_eq!(summary.potencies, Potencies::from_attributes(&Attributes::default()));
    }
}
