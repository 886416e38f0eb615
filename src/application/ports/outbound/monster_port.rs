use async_trait::async_trait;

use crate::domain::entities::Monster;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed catalog entry: {0}")]
    Malformed(String),
}

/// Read-only monster catalog
#[async_trait]
pub trait MonsterCatalogPort: Send + Sync {
    async fn list_monsters(&self) -> Result<Vec<Monster>, CatalogError>;
}
