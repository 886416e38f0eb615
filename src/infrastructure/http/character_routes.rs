//! Character API routes
//!
//! Sheet CRUD under an account, plus the derived-stat endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::{
    CharacterError, CreateCharacterRequest, UpdateCharacterRequest,
};
use crate::domain::entities::PlayerCharacter;
use crate::domain::services::DerivedStats;
use crate::domain::value_objects::{
    Ability, AbilityScores, CharacterClass, CharacterId, Skill,
};
use crate::infrastructure::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a character sheet
#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequestDto {
    pub name: String,
    pub class: CharacterClass,
    pub level: u8,
    pub abilities: AbilityScores,
    #[serde(default)]
    pub skill_proficiencies: Vec<Skill>,
    #[serde(default)]
    pub save_proficiencies: Option<Vec<Ability>>,
    #[serde(default)]
    pub spellcasting_ability: Option<Ability>,
}

/// Request to update a character sheet
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCharacterRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<CharacterClass>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub abilities: Option<AbilityScores>,
    #[serde(default)]
    pub skill_proficiencies: Option<Vec<Skill>>,
    #[serde(default)]
    pub save_proficiencies: Option<Vec<Ability>>,
    #[serde(default)]
    pub spellcasting_ability: Option<Ability>,
}

#[derive(Debug, Serialize)]
pub struct CharacterResponseDto {
    pub id: String,
    pub name: String,
    pub class: CharacterClass,
    pub level: u8,
    pub abilities: AbilityScores,
    pub save_proficiencies: Vec<Ability>,
    pub skill_proficiencies: Vec<Skill>,
    pub spellcasting_ability: Option<Ability>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlayerCharacter> for CharacterResponseDto {
    fn from(character: PlayerCharacter) -> Self {
        Self {
            id: character.id.to_string(),
            name: character.name,
            class: character.class,
            level: character.level,
            abilities: character.abilities,
            save_proficiencies: character.save_proficiencies,
            skill_proficiencies: character.skill_proficiencies,
            spellcasting_ability: character.spellcasting_ability,
            created_at: character.created_at,
            updated_at: character.updated_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// List an account's characters
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<CharacterResponseDto>>, (StatusCode, String)> {
    let characters = state
        .character_service
        .list(&username)
        .await
        .map_err(map_character_error)?;

    Ok(Json(characters.into_iter().map(Into::into).collect()))
}

/// Create a character
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(req): Json<CreateCharacterRequestDto>,
) -> Result<(StatusCode, Json<CharacterResponseDto>), (StatusCode, String)> {
    let service_request = CreateCharacterRequest {
        name: req.name,
        class: req.class,
        level: req.level,
        abilities: req.abilities,
        skill_proficiencies: req.skill_proficiencies,
        save_proficiencies: req.save_proficiencies,
        spellcasting_ability: req.spellcasting_ability,
    };

    let character = state
        .character_service
        .create(&username, service_request)
        .await
        .map_err(map_character_error)?;

    Ok((StatusCode::CREATED, Json(character.into())))
}

/// Get a single character
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path((username, id)): Path<(String, String)>,
) -> Result<Json<CharacterResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let character = state
        .character_service
        .get(&username, id)
        .await
        .map_err(map_character_error)?;

    Ok(Json(character.into()))
}

/// Update a character
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Path((username, id)): Path<(String, String)>,
    Json(req): Json<UpdateCharacterRequestDto>,
) -> Result<Json<CharacterResponseDto>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let service_request = UpdateCharacterRequest {
        name: req.name,
        class: req.class,
        level: req.level,
        abilities: req.abilities,
        skill_proficiencies: req.skill_proficiencies,
        save_proficiencies: req.save_proficiencies,
        spellcasting_ability: req.spellcasting_ability,
    };

    let character = state
        .character_service
        .update(&username, id, service_request)
        .await
        .map_err(map_character_error)?;

    Ok(Json(character.into()))
}

/// Delete a character
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path((username, id)): Path<(String, String)>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    state
        .character_service
        .delete(&username, id)
        .await
        .map_err(map_character_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Derived stats for a character
pub async fn character_stats(
    State(state): State<Arc<AppState>>,
    Path((username, id)): Path<(String, String)>,
) -> Result<Json<DerivedStats>, (StatusCode, String)> {
    let id = parse_character_id(&id)?;
    let stats = state
        .character_service
        .derived_stats(&username, id)
        .await
        .map_err(map_character_error)?;

    Ok(Json(stats))
}

fn parse_character_id(id: &str) -> Result<CharacterId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(CharacterId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid character ID".to_string()))
}

fn map_character_error(e: CharacterError) -> (StatusCode, String) {
    match e {
        CharacterError::AccountNotFound(_) | CharacterError::NotFound(_) => {
            (StatusCode::NOT_FOUND, e.to_string())
        }
        CharacterError::LevelOutOfRange(_) | CharacterError::AbilityScoreOutOfRange(_, _) => {
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        CharacterError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
