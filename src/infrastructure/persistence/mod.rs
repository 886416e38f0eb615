//! Persistence adapters
//!
//! File-backed implementations of the account store and monster catalog
//! ports. The account store is the system of record; the monster catalog is
//! read-only reference data.

mod json_account_store;
mod json_monster_catalog;

pub use json_account_store::JsonAccountStore;
pub use json_monster_catalog::JsonMonsterCatalog;
