//! Application services - use case implementations over the outbound ports

pub mod account_service;
pub mod character_service;
pub mod encounter_service;

pub use account_service::{AccountError, AccountService};
pub use character_service::{
    CharacterError, CharacterService, CreateCharacterRequest, UpdateCharacterRequest,
};
pub use encounter_service::{EncounterService, EncounterServiceError};
