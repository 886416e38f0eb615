//! Value objects - Immutable objects defined by their attributes

mod ability;
mod challenge_rating;
mod class;
mod difficulty;
mod ids;
mod skill;

pub use ability::{Ability, AbilityScores};
pub use challenge_rating::{ChallengeRating, InvalidChallengeRating};
pub use class::CharacterClass;
pub use difficulty::EncounterDifficulty;
pub use ids::*;
pub use skill::Skill;
