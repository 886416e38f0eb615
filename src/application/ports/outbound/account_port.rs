use async_trait::async_trait;

use crate::domain::entities::Account;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Key-value account records, keyed by username
#[async_trait]
pub trait AccountRepositoryPort: Send + Sync {
    async fn get(&self, username: &str) -> Result<Option<Account>, StoreError>;
    async fn save(&self, account: &Account) -> Result<(), StoreError>;
    /// Push pending changes to durable storage
    async fn flush(&self) -> Result<(), StoreError>;
}
