//! Encounter service - request validation and catalog plumbing around the builder

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::outbound::{CatalogError, MonsterCatalogPort};
use crate::application::services::character_service::{MAX_LEVEL, MIN_LEVEL};
use crate::domain::entities::Monster;
use crate::domain::services::{
    EncounterBuilder, EncounterError, EncounterRequest, EncounterResult, MonsterCount,
};

#[derive(Debug, thiserror::Error)]
pub enum EncounterServiceError {
    #[error("party level {0} is outside 1..=20")]
    PartyLevelOutOfRange(u8),
    #[error("party size must be at least 1")]
    EmptyParty,
    #[error("monster count must be at least 1")]
    ZeroMonsterCount,
    #[error(transparent)]
    Encounter(#[from] EncounterError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub struct EncounterService {
    catalog: Arc<dyn MonsterCatalogPort>,
}

impl EncounterService {
    pub fn new(catalog: Arc<dyn MonsterCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn generate(
        &self,
        request: EncounterRequest,
    ) -> Result<EncounterResult, EncounterServiceError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&request.party_level) {
            return Err(EncounterServiceError::PartyLevelOutOfRange(
                request.party_level,
            ));
        }
        if request.party_size == 0 {
            return Err(EncounterServiceError::EmptyParty);
        }
        if request.monster_count == MonsterCount::Exactly(0) {
            return Err(EncounterServiceError::ZeroMonsterCount);
        }

        let monsters = self.catalog.list_monsters().await?;
        let result = EncounterBuilder::new(&monsters).build(&request)?;
        debug!(
            "Generated encounter: {} entries, {} XP against a budget of {}",
            result.entries.len(),
            result.total_xp,
            result.xp_budget
        );
        Ok(result)
    }

    pub async fn list_monsters(&self) -> Result<Vec<Monster>, EncounterServiceError> {
        Ok(self.catalog.list_monsters().await?)
    }
}
