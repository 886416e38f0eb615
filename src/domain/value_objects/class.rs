//! Character classes and the per-class rule data the stat engine consumes

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Ability;

/// The twelve playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 12] = [
        CharacterClass::Barbarian,
        CharacterClass::Bard,
        CharacterClass::Cleric,
        CharacterClass::Druid,
        CharacterClass::Fighter,
        CharacterClass::Monk,
        CharacterClass::Paladin,
        CharacterClass::Ranger,
        CharacterClass::Rogue,
        CharacterClass::Sorcerer,
        CharacterClass::Warlock,
        CharacterClass::Wizard,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
        }
    }

    /// Size of the class hit die (d6 through d12)
    pub fn hit_die(&self) -> i32 {
        match self {
            Self::Barbarian => 12,
            Self::Fighter | Self::Paladin | Self::Ranger => 10,
            Self::Bard
            | Self::Cleric
            | Self::Druid
            | Self::Monk
            | Self::Rogue
            | Self::Warlock => 8,
            Self::Sorcerer | Self::Wizard => 6,
        }
    }

    /// The two saving throws the class is proficient in
    pub fn saving_throw_proficiencies(&self) -> [Ability; 2] {
        match self {
            Self::Barbarian => [Ability::Strength, Ability::Constitution],
            Self::Bard => [Ability::Dexterity, Ability::Charisma],
            Self::Cleric => [Ability::Wisdom, Ability::Charisma],
            Self::Druid => [Ability::Intelligence, Ability::Wisdom],
            Self::Fighter => [Ability::Strength, Ability::Constitution],
            Self::Monk => [Ability::Strength, Ability::Dexterity],
            Self::Paladin => [Ability::Wisdom, Ability::Charisma],
            Self::Ranger => [Ability::Strength, Ability::Dexterity],
            Self::Rogue => [Ability::Dexterity, Ability::Intelligence],
            Self::Sorcerer => [Ability::Constitution, Ability::Charisma],
            Self::Warlock => [Ability::Wisdom, Ability::Charisma],
            Self::Wizard => [Ability::Intelligence, Ability::Wisdom],
        }
    }

    /// The class's casting ability; None for non-casters
    pub fn default_spellcasting_ability(&self) -> Option<Ability> {
        match self {
            Self::Bard | Self::Paladin | Self::Sorcerer | Self::Warlock => {
                Some(Ability::Charisma)
            }
            Self::Cleric | Self::Druid | Self::Ranger => Some(Ability::Wisdom),
            Self::Wizard => Some(Ability::Intelligence),
            Self::Barbarian | Self::Fighter | Self::Monk | Self::Rogue => None,
        }
    }

    /// Secondary ability for the Unarmored Defense trait, where the class has it
    pub fn unarmored_defense_secondary(&self) -> Option<Ability> {
        match self {
            Self::Barbarian => Some(Ability::Constitution),
            Self::Monk => Some(Ability::Wisdom),
            _ => None,
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_dice() {
        assert_eq!(CharacterClass::Barbarian.hit_die(), 12);
        assert_eq!(CharacterClass::Fighter.hit_die(), 10);
        assert_eq!(CharacterClass::Paladin.hit_die(), 10);
        assert_eq!(CharacterClass::Ranger.hit_die(), 10);
        assert_eq!(CharacterClass::Rogue.hit_die(), 8);
        assert_eq!(CharacterClass::Sorcerer.hit_die(), 6);
        assert_eq!(CharacterClass::Wizard.hit_die(), 6);
    }

    #[test]
    fn test_every_class_has_two_save_proficiencies() {
        for class in CharacterClass::ALL {
            let [a, b] = class.saving_throw_proficiencies();
            assert_ne!(a, b, "{} lists the same save twice", class);
        }
    }

    #[test]
    fn test_spellcasting_abilities() {
        assert_eq!(
            CharacterClass::Wizard.default_spellcasting_ability(),
            Some(Ability::Intelligence)
        );
        assert_eq!(
            CharacterClass::Cleric.default_spellcasting_ability(),
            Some(Ability::Wisdom)
        );
        assert_eq!(
            CharacterClass::Warlock.default_spellcasting_ability(),
            Some(Ability::Charisma)
        );
        assert_eq!(CharacterClass::Fighter.default_spellcasting_ability(), None);
    }

    #[test]
    fn test_unarmored_defense_classes() {
        assert_eq!(
            CharacterClass::Barbarian.unarmored_defense_secondary(),
            Some(Ability::Constitution)
        );
        assert_eq!(
            CharacterClass::Monk.unarmored_defense_secondary(),
            Some(Ability::Wisdom)
        );
        assert_eq!(CharacterClass::Wizard.unarmored_defense_secondary(), None);
    }
}
