//! Character service - sheet CRUD within an account, plus derived stats
//!
//! Range rules the stat engine assumes (levels 1..=20, scores 1..=30) are
//! enforced here, where sheets enter the system.

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::outbound::{AccountRepositoryPort, StoreError};
use crate::domain::entities::PlayerCharacter;
use crate::domain::services::DerivedStats;
use crate::domain::value_objects::{
    Ability, AbilityScores, CharacterClass, CharacterId, Skill,
};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 20;

#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("account '{0}' not found")]
    AccountNotFound(String),
    #[error("character {0} not found")]
    NotFound(CharacterId),
    #[error("level {0} is outside 1..=20")]
    LevelOutOfRange(u8),
    #[error("{0} score {1} is outside 1..=30")]
    AbilityScoreOutOfRange(Ability, u8),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Request to create a new character sheet
#[derive(Debug, Clone)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub class: CharacterClass,
    pub level: u8,
    pub abilities: AbilityScores,
    pub skill_proficiencies: Vec<Skill>,
    /// Defaults to the class's two saves when absent
    pub save_proficiencies: Option<Vec<Ability>>,
    pub spellcasting_ability: Option<Ability>,
}

/// Request to update an existing character sheet
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub class: Option<CharacterClass>,
    pub level: Option<u8>,
    pub abilities: Option<AbilityScores>,
    pub skill_proficiencies: Option<Vec<Skill>>,
    pub save_proficiencies: Option<Vec<Ability>>,
    pub spellcasting_ability: Option<Ability>,
}

pub struct CharacterService {
    store: Arc<dyn AccountRepositoryPort>,
}

impl CharacterService {
    pub fn new(store: Arc<dyn AccountRepositoryPort>) -> Self {
        Self { store }
    }

    pub async fn list(&self, username: &str) -> Result<Vec<PlayerCharacter>, CharacterError> {
        Ok(self.account(username).await?.characters)
    }

    pub async fn get(
        &self,
        username: &str,
        id: CharacterId,
    ) -> Result<PlayerCharacter, CharacterError> {
        self.account(username)
            .await?
            .character(id)
            .cloned()
            .ok_or(CharacterError::NotFound(id))
    }

    pub async fn create(
        &self,
        username: &str,
        request: CreateCharacterRequest,
    ) -> Result<PlayerCharacter, CharacterError> {
        validate_level(request.level)?;
        validate_scores(&request.abilities)?;

        let mut character =
            PlayerCharacter::new(request.name, request.class, request.level, request.abilities);
        character.skill_proficiencies = request.skill_proficiencies;
        if let Some(saves) = request.save_proficiencies {
            character.save_proficiencies = saves;
        }
        character.spellcasting_ability = request.spellcasting_ability;

        let mut account = self.account(username).await?;
        account.add_character(character.clone());
        self.store.save(&account).await?;
        debug!("Created character '{}' for '{}'", character.name, username);
        Ok(character)
    }

    pub async fn update(
        &self,
        username: &str,
        id: CharacterId,
        request: UpdateCharacterRequest,
    ) -> Result<PlayerCharacter, CharacterError> {
        if let Some(level) = request.level {
            validate_level(level)?;
        }
        if let Some(abilities) = &request.abilities {
            validate_scores(abilities)?;
        }

        let mut account = self.account(username).await?;
        let character = account
            .character_mut(id)
            .ok_or(CharacterError::NotFound(id))?;

        if let Some(name) = request.name {
            character.name = name;
        }
        if let Some(class) = request.class {
            character.class = class;
        }
        if let Some(level) = request.level {
            character.level = level;
        }
        if let Some(abilities) = request.abilities {
            character.abilities = abilities;
        }
        if let Some(skills) = request.skill_proficiencies {
            character.skill_proficiencies = skills;
        }
        if let Some(saves) = request.save_proficiencies {
            character.save_proficiencies = saves;
        }
        if let Some(ability) = request.spellcasting_ability {
            character.spellcasting_ability = Some(ability);
        }
        character.touch();

        let updated = character.clone();
        self.store.save(&account).await?;
        Ok(updated)
    }

    pub async fn delete(&self, username: &str, id: CharacterId) -> Result<(), CharacterError> {
        let mut account = self.account(username).await?;
        if !account.remove_character(id) {
            return Err(CharacterError::NotFound(id));
        }
        self.store.save(&account).await?;
        Ok(())
    }

    /// Run the stat engine over one stored sheet
    pub async fn derived_stats(
        &self,
        username: &str,
        id: CharacterId,
    ) -> Result<DerivedStats, CharacterError> {
        let character = self.get(username, id).await?;
        Ok(DerivedStats::for_character(&character))
    }

    async fn account(
        &self,
        username: &str,
    ) -> Result<crate::domain::entities::Account, CharacterError> {
        self.store
            .get(username)
            .await?
            .ok_or_else(|| CharacterError::AccountNotFound(username.to_string()))
    }
}

fn validate_level(level: u8) -> Result<(), CharacterError> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(CharacterError::LevelOutOfRange(level))
    }
}

fn validate_scores(abilities: &AbilityScores) -> Result<(), CharacterError> {
    match abilities.first_out_of_range() {
        None => Ok(()),
        Some((ability, score)) => Err(CharacterError::AbilityScoreOutOfRange(ability, score)),
    }
}
