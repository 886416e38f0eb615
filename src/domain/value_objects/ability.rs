//! Abilities and ability score sets

use serde::{Deserialize, Serialize};

/// The six abilities every character and save is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw ability scores for one character
///
/// Each score lives in the inclusive range 1..=30. The range is enforced where
/// scores enter the system (character create/update); the stat engine consumes
/// these values as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl AbilityScores {
    pub const MIN_SCORE: u8 = 1;
    pub const MAX_SCORE: u8 = 30;

    pub fn new(
        strength: u8,
        dexterity: u8,
        constitution: u8,
        intelligence: u8,
        wisdom: u8,
        charisma: u8,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn score(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// First ability whose score falls outside 1..=30, if any
    pub fn first_out_of_range(&self) -> Option<(Ability, u8)> {
        Ability::ALL.into_iter().find_map(|ability| {
            let score = self.score(ability);
            if (Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score) {
                None
            } else {
                Some((ability, score))
            }
        })
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        // The standard starting baseline before point-buy or rolls
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_lookup() {
        let scores = AbilityScores::new(15, 14, 13, 12, 10, 8);
        assert_eq!(scores.score(Ability::Strength), 15);
        assert_eq!(scores.score(Ability::Wisdom), 10);
        assert_eq!(scores.score(Ability::Charisma), 8);
    }

    #[test]
    fn test_out_of_range_detection() {
        let scores = AbilityScores::default();
        assert!(scores.first_out_of_range().is_none());

        let mut bad = scores;
        bad.dexterity = 0;
        assert_eq!(bad.first_out_of_range(), Some((Ability::Dexterity, 0)));

        let mut high = scores;
        high.charisma = 31;
        assert_eq!(high.first_out_of_range(), Some((Ability::Charisma, 31)));
    }
}
