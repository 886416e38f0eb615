//! Account entity - a user record owning character sheets
//!
//! Passwords are stored and compared in plaintext. The original companion
//! worked this way and hardening it is out of scope here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::PlayerCharacter;
use crate::domain::value_objects::{AccountId, CharacterId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Unique key the account is stored under
    pub username: String,
    pub password: String,
    pub characters: Vec<PlayerCharacter>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            username: username.into(),
            password: password.into(),
            characters: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn character(&self, id: CharacterId) -> Option<&PlayerCharacter> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut PlayerCharacter> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn add_character(&mut self, character: PlayerCharacter) {
        self.characters.push(character);
        self.updated_at = Utc::now();
    }

    pub fn remove_character(&mut self, id: CharacterId) -> bool {
        if let Some(pos) = self.characters.iter().position(|c| c.id == id) {
            self.characters.remove(pos);
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }
}
