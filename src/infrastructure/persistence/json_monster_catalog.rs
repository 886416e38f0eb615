//! File-backed monster catalog
//!
//! Reads a JSON array of monsters once at startup and serves it from memory.
//! The bundled `data/monsters.json` covers the SRD challenge-rating spread the
//! generator filters over.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::application::ports::outbound::{CatalogError, MonsterCatalogPort};
use crate::domain::entities::Monster;

#[derive(Debug)]
pub struct JsonMonsterCatalog {
    monsters: Vec<Monster>,
}

impl JsonMonsterCatalog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", path.display(), e)))?;
        let monsters: Vec<Monster> = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        info!(
            "Monster catalog loaded from {} ({} monsters)",
            path.display(),
            monsters.len()
        );
        Ok(Self { monsters })
    }
}

#[async_trait]
impl MonsterCatalogPort for JsonMonsterCatalog {
    async fn list_monsters(&self) -> Result<Vec<Monster>, CatalogError> {
        Ok(self.monsters.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ChallengeRating;
    use std::io::Write;

    #[tokio::test]
    async fn test_open_and_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name":"Goblin","challenge_rating":"1/4","type":"humanoid","size":"small"}},
                {{"name":"Ogre","challenge_rating":2,"type":"giant","size":"large"}}
            ]"#
        )
        .unwrap();

        let catalog = JsonMonsterCatalog::open(file.path()).unwrap();
        let monsters = catalog.list_monsters().await.unwrap();
        assert_eq!(monsters.len(), 2);
        assert_eq!(monsters[0].challenge_rating, ChallengeRating::Quarter);
        assert_eq!(monsters[1].challenge_rating, ChallengeRating::Whole(2));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = JsonMonsterCatalog::open("no/such/monsters.json").unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[test]
    fn test_bad_entry_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Mystery","challenge_rating":"3/4","type":"ooze","size":"medium"}}]"#
        )
        .unwrap();
        let err = JsonMonsterCatalog::open(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
