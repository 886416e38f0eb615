//! In-memory session table
//!
//! Sessions are created on login and removed on logout; nothing survives a
//! restart, which matches the original companion's behavior.

use std::collections::HashMap;

use crate::domain::value_objects::SessionId;

#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, String>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, username: impl Into<String>) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, username.into());
        id
    }

    pub fn username_for(&self, id: SessionId) -> Option<&str> {
        self.sessions.get(&id).map(String::as_str)
    }

    pub fn end(&mut self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}
