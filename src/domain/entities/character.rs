//! Player character entity - the sheet the stat engine reads from
//!
//! A character carries only raw inputs (class, level, scores, proficiency
//! flags). Everything derived from them lives in `DerivedStats`, computed on
//! demand and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Ability, AbilityScores, CharacterClass, CharacterId, Skill,
};

/// A player character sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub id: CharacterId,
    pub name: String,
    pub class: CharacterClass,
    /// Character level, 1..=20
    pub level: u8,
    pub abilities: AbilityScores,
    /// Saving throws the character is proficient in (two per class, by rule;
    /// stored per character and not re-derived, so house rules survive edits)
    pub save_proficiencies: Vec<Ability>,
    /// Skills the character is proficient in
    pub skill_proficiencies: Vec<Skill>,
    /// Overrides the class's casting ability when set
    pub spellcasting_ability: Option<Ability>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerCharacter {
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        level: u8,
        abilities: AbilityScores,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            class,
            level,
            abilities,
            save_proficiencies: class.saving_throw_proficiencies().to_vec(),
            skill_proficiencies: Vec::new(),
            spellcasting_ability: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_skill_proficiency(mut self, skill: Skill) -> Self {
        if !self.skill_proficiencies.contains(&skill) {
            self.skill_proficiencies.push(skill);
        }
        self
    }

    pub fn with_save_proficiencies(mut self, saves: Vec<Ability>) -> Self {
        self.save_proficiencies = saves;
        self
    }

    pub fn with_spellcasting_ability(mut self, ability: Ability) -> Self {
        self.spellcasting_ability = Some(ability);
        self
    }

    pub fn is_save_proficient(&self, ability: Ability) -> bool {
        self.save_proficiencies.contains(&ability)
    }

    pub fn is_skill_proficient(&self, skill: Skill) -> bool {
        self.skill_proficiencies.contains(&skill)
    }

    /// The ability this character casts with: an explicit selection wins,
    /// otherwise the class default (None for non-casters)
    pub fn effective_spellcasting_ability(&self) -> Option<Ability> {
        self.spellcasting_ability
            .or_else(|| self.class.default_spellcasting_ability())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
