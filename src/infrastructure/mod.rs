//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: JSON-file account store and monster catalog
//! - Monster API: client for a dnd5eapi-compatible compendium
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state
//! - Session: Login session management

pub mod config;
pub mod http;
pub mod monster_api;
pub mod persistence;
pub mod session;
pub mod state;
