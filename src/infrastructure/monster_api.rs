//! Client for a dnd5eapi-compatible monster compendium
//!
//! Walks the list endpoint, then fetches each monster's detail record.
//! Responses are mapped straight into domain monsters; nothing is cached
//! between calls.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::outbound::{CatalogError, MonsterCatalogPort};
use crate::domain::entities::{CreatureSize, Monster};
use crate::domain::value_objects::ChallengeRating;

pub struct MonsterApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MonsterApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("unusable monster record '{name}': {reason}")]
    BadRecord { name: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct MonsterListResponse {
    results: Vec<MonsterListEntry>,
}

#[derive(Debug, Deserialize)]
struct MonsterListEntry {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct MonsterDetail {
    name: String,
    challenge_rating: ChallengeRating,
    #[serde(rename = "type")]
    creature_type: String,
    size: String,
}

impl MonsterApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full monster index
    pub async fn fetch_all(&self) -> Result<Vec<Monster>, MonsterApiError> {
        let response = self
            .client
            .get(format!("{}/api/monsters", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MonsterApiError::Api(response.status().to_string()));
        }
        let listing: MonsterListResponse = response.json().await?;

        let mut monsters = Vec::with_capacity(listing.results.len());
        for entry in listing.results {
            monsters.push(self.fetch_detail(&entry).await?);
        }
        Ok(monsters)
    }

    async fn fetch_detail(&self, entry: &MonsterListEntry) -> Result<Monster, MonsterApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, entry.url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MonsterApiError::Api(format!(
                "{} for {}",
                response.status(),
                entry.name
            )));
        }
        let detail: MonsterDetail = response.json().await?;

        let size: CreatureSize =
            detail
                .size
                .parse()
                .map_err(|reason: String| MonsterApiError::BadRecord {
                    name: detail.name.clone(),
                    reason,
                })?;
        Ok(Monster::new(
            detail.name,
            detail.challenge_rating,
            detail.creature_type,
            size,
        ))
    }
}

#[async_trait]
impl MonsterCatalogPort for MonsterApiClient {
    async fn list_monsters(&self) -> Result<Vec<Monster>, CatalogError> {
        self.fetch_all().await.map_err(|e| match e {
            MonsterApiError::BadRecord { .. } => CatalogError::Malformed(e.to_string()),
            other => CatalogError::Unavailable(other.to_string()),
        })
    }
}
