//! Account service - registration and login against the account store
//!
//! Passwords are compared as plain strings, faithfully to the original
//! companion. Unknown usernames and wrong passwords both collapse into
//! `InvalidCredentials` so the HTTP layer leaks nothing either way.

use std::sync::Arc;

use tracing::info;

use crate::application::ports::outbound::{AccountRepositoryPort, StoreError};
use crate::domain::entities::Account;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account '{0}' already exists")]
    AlreadyExists(String),
    #[error("account '{0}' not found")]
    NotFound(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("username and password must be non-empty")]
    EmptyCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AccountService {
    store: Arc<dyn AccountRepositoryPort>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountRepositoryPort>) -> Self {
        Self { store }
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<Account, AccountError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::EmptyCredentials);
        }
        if self.store.get(username).await?.is_some() {
            return Err(AccountError::AlreadyExists(username.to_string()));
        }

        let account = Account::new(username, password);
        self.store.save(&account).await?;
        info!("Registered account '{}'", username);
        Ok(account)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Account, AccountError> {
        let account = self
            .store
            .get(username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;
        if !account.verify_password(password) {
            return Err(AccountError::InvalidCredentials);
        }
        Ok(account)
    }

    pub async fn get(&self, username: &str) -> Result<Account, AccountError> {
        self.store
            .get(username)
            .await?
            .ok_or_else(|| AccountError::NotFound(username.to_string()))
    }
}
