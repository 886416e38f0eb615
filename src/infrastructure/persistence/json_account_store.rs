//! JSON-file account store
//!
//! Accounts live in one JSON object keyed by username. The whole map is read
//! into memory at startup; mutations mark the store dirty and a flush writes
//! the file atomically (temp file, then rename). The autosave worker and the
//! shutdown path decide when flushes happen.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::application::ports::outbound::{AccountRepositoryPort, StoreError};
use crate::domain::entities::Account;

pub struct JsonAccountStore {
    path: PathBuf,
    accounts: RwLock<HashMap<String, Account>>,
    dirty: AtomicBool,
}

impl JsonAccountStore {
    /// Open the store, reading existing records if the file is present
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let accounts = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        info!(
            "Account store opened from {} ({} accounts)",
            path.display(),
            accounts.len()
        );
        Ok(Self {
            path,
            accounts: RwLock::new(accounts),
            dirty: AtomicBool::new(false),
        })
    }

    /// Write the current map to disk if anything changed since the last flush
    pub async fn flush_if_dirty(&self) -> Result<(), StoreError> {
        if self.dirty.swap(false, Ordering::AcqRel) {
            if let Err(e) = self.write_file().await {
                self.dirty.store(true, Ordering::Release);
                return Err(e);
            }
            debug!("Account store flushed to {}", self.path.display());
        }
        Ok(())
    }

    async fn write_file(&self) -> Result<(), StoreError> {
        let bytes = {
            let accounts = self.accounts.read().await;
            serde_json::to_vec_pretty(&*accounts)
                .map_err(|e| StoreError::Serialization(e.to_string()))?
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Io(e.to_string()))?;
            }
        }

        let tmp = temp_path(&self.path);
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[async_trait]
impl AccountRepositoryPort for JsonAccountStore {
    async fn get(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        self.accounts
            .write()
            .await
            .insert(account.username.clone(), account.clone());
        self.dirty.store(true, Ordering::Release);
        Ok(())
    }

    async fn flush(&self) -> Result<(), StoreError> {
        self.flush_if_dirty().await
    }
}
