//! Shared application state

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::application::ports::outbound::MonsterCatalogPort;
use crate::application::services::{AccountService, CharacterService, EncounterService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::monster_api::MonsterApiClient;
use crate::infrastructure::persistence::{JsonAccountStore, JsonMonsterCatalog};
use crate::infrastructure::session::SessionManager;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Concrete store handle, kept for the autosave worker and shutdown flush
    pub account_store: Arc<JsonAccountStore>,
    /// Active login sessions
    pub sessions: RwLock<SessionManager>,
    // Application services
    pub account_service: AccountService,
    pub character_service: CharacterService,
    pub encounter_service: EncounterService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let account_store = Arc::new(JsonAccountStore::open(&config.accounts_path).await?);

        let catalog: Arc<dyn MonsterCatalogPort> = match &config.monster_api_url {
            Some(url) => Arc::new(MonsterApiClient::new(url)),
            None => Arc::new(JsonMonsterCatalog::open(&config.monster_data_path)?),
        };

        let account_service = AccountService::new(account_store.clone());
        let character_service = CharacterService::new(account_store.clone());
        let encounter_service = EncounterService::new(catalog);

        Ok(Self {
            config,
            account_store,
            sessions: RwLock::new(SessionManager::new()),
            account_service,
            character_service,
            encounter_service,
        })
    }
}
