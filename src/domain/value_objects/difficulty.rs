//! Encounter difficulty tiers

use serde::{Deserialize, Serialize};

/// The five difficulty tiers the generator budgets against
///
/// Wire form matches the companion's historical keys, so `VeryHard` serializes
/// as `"veryhard"` rather than snake case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterDifficulty {
    Easy,
    Medium,
    Hard,
    #[serde(rename = "veryhard")]
    VeryHard,
    Deadly,
}

impl EncounterDifficulty {
    pub const ALL: [EncounterDifficulty; 5] = [
        EncounterDifficulty::Easy,
        EncounterDifficulty::Medium,
        EncounterDifficulty::Hard,
        EncounterDifficulty::VeryHard,
        EncounterDifficulty::Deadly,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
            Self::Deadly => "Deadly",
        }
    }

    /// Coarse party win-chance indicator, a static lookup rather than a simulation
    pub fn win_chance_percent(&self) -> u8 {
        match self {
            Self::Easy => 95,
            Self::Medium => 75,
            Self::Hard => 50,
            Self::VeryHard => 25,
            Self::Deadly => 5,
        }
    }
}

impl std::fmt::Display for EncounterDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
