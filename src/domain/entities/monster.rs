//! Monster catalog entry - read-only input to the encounter builder

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ChallengeRating;

/// Creature size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl CreatureSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tiny => "Tiny",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
            Self::Gargantuan => "Gargantuan",
        }
    }
}

impl std::str::FromStr for CreatureSize {
    type Err = String;

    /// Case-insensitive, so API payloads like "Large" parse too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tiny" => Ok(Self::Tiny),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "huge" => Ok(Self::Huge),
            "gargantuan" => Ok(Self::Gargantuan),
            other => Err(format!("unknown creature size '{}'", other)),
        }
    }
}

/// One monster from the catalog, unique by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub challenge_rating: ChallengeRating,
    /// Creature type (beast, fiend, undead, ...) - free text, catalog-supplied
    #[serde(rename = "type")]
    pub creature_type: String,
    pub size: CreatureSize,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        challenge_rating: ChallengeRating,
        creature_type: impl Into<String>,
        size: CreatureSize,
    ) -> Self {
        Self {
            name: name.into(),
            challenge_rating,
            creature_type: creature_type.into(),
            size,
        }
    }

    /// XP value through the same table the encounter filter uses
    pub fn xp(&self) -> u32 {
        self.challenge_rating.xp()
    }
}
