//! Encounter API routes
//!
//! Monster listing and encounter generation.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::services::EncounterServiceError;
use crate::domain::entities::Monster;
use crate::domain::services::{
    EncounterRequest, EncounterResult, MonsterCount,
};
use crate::domain::value_objects::EncounterDifficulty;
use crate::infrastructure::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to generate an encounter
#[derive(Debug, Deserialize)]
pub struct GenerateEncounterRequestDto {
    pub party_level: u8,
    pub party_size: u32,
    pub difficulty: EncounterDifficulty,
    /// Omitted or null means automatic roster sizing
    #[serde(default)]
    pub monster_count: Option<u32>,
}

impl From<GenerateEncounterRequestDto> for EncounterRequest {
    fn from(req: GenerateEncounterRequestDto) -> Self {
        Self {
            party_level: req.party_level,
            party_size: req.party_size,
            difficulty: req.difficulty,
            monster_count: req
                .monster_count
                .map(MonsterCount::Exactly)
                .unwrap_or(MonsterCount::Auto),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// List the monster catalog
pub async fn list_monsters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Monster>>, (StatusCode, String)> {
    let monsters = state
        .encounter_service
        .list_monsters()
        .await
        .map_err(map_encounter_error)?;

    Ok(Json(monsters))
}

/// Generate an encounter for a party
pub async fn generate_encounter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateEncounterRequestDto>,
) -> Result<Json<EncounterResult>, (StatusCode, String)> {
    let result = state
        .encounter_service
        .generate(req.into())
        .await
        .map_err(map_encounter_error)?;

    Ok(Json(result))
}

fn map_encounter_error(e: EncounterServiceError) -> (StatusCode, String) {
    match e {
        EncounterServiceError::PartyLevelOutOfRange(_)
        | EncounterServiceError::EmptyParty
        | EncounterServiceError::ZeroMonsterCount => (StatusCode::BAD_REQUEST, e.to_string()),
        EncounterServiceError::Encounter(_) => (StatusCode::NOT_FOUND, e.to_string()),
        EncounterServiceError::Catalog(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
