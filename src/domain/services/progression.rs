//! Skills, projects, victories and experience

use crate::domain::entities::{Character, Project, Skill};
use crate::domain::events::RestOutcome;

/// Learn a skill unless one with the same name is already known
///
/// Returns false, leaving the sheet unchanged, for a duplicate or blank name.
pub fn acquire_skill(character: &mut Character, name: &str, category: &str) -> bool {
    if name.trim().is_empty() || character.has_skill(name) {
        return false;
    }
    character.skills.push(Skill::new(name, category));
    true
}

/// Remove the skill at `index`; out-of-range indices are ignored
pub fn remove_skill(character: &mut Character, index: usize) -> Option<Skill> {
    (index < character.skills.len()).then(|| character.skills.remove(index))
}

pub fn add_project(character: &mut Character, project: Project) {
    character.projects.push(project);
}

/// Remove the project at `index`; out-of-range indices are ignored
pub fn remove_project(character: &mut Character, index: usize) -> Option<Project> {
    (index < character.projects.len()).then(|| character.projects.remove(index))
}

/// Record one more victory
pub fn add_victory(character: &mut Character) -> u32 {
    character.victories = character.victories.saturating_add(1);
    character.victories
}

/// Rest: move every victory into experience
pub fn convert_victories_to_xp(character: &mut Character) -> RestOutcome {
    let gained = character.victories;
    character.xp = character.xp.saturating_add(gained);
    character.victories = 0;
    RestOutcome {
        gained,
        xp: character.xp,
    }
}
