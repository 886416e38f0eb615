//! Account API routes
//!
//! Registration, login and logout. Responses never echo the stored password
//! even though the store keeps it in plaintext.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::services::AccountError;
use crate::domain::entities::Account;
use crate::domain::value_objects::SessionId;
use crate::infrastructure::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub character_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username,
            character_count: account.characters.len(),
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_id: String,
    pub account: AccountResponse,
}

// ============================================================================
// Handlers
// ============================================================================

/// Register a new account
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), (StatusCode, String)> {
    let account = state
        .account_service
        .register(&req.username, &req.password)
        .await
        .map_err(map_account_error)?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Log in and open a session
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    let account = state
        .account_service
        .login(&req.username, &req.password)
        .await
        .map_err(map_account_error)?;

    let session_id = state.sessions.write().await.create(&account.username);
    Ok(Json(LoginResponse {
        session_id: session_id.to_string(),
        account: account.into(),
    }))
}

/// Close a session
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogoutRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let uuid = Uuid::parse_str(&req.session_id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID".to_string()))?;

    if state.sessions.write().await.end(SessionId::from_uuid(uuid)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Session not found".to_string()))
    }
}

fn map_account_error(e: AccountError) -> (StatusCode, String) {
    match e {
        AccountError::AlreadyExists(_) => (StatusCode::CONFLICT, e.to_string()),
        AccountError::EmptyCredentials => (StatusCode::BAD_REQUEST, e.to_string()),
        AccountError::InvalidCredentials => (StatusCode::UNAUTHORIZED, e.to_string()),
        AccountError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        AccountError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
