//! Storage-backed squadron repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::squadron::{Squadron, SquadronName, SquadronRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of SquadronRepository
#[derive(Debug)]
pub struct StorageSquadronRepository {
    storage: Arc<dyn Storage<Squadron>>,
}

impl StorageSquadronRepository {
    pub fn new(storage: Arc<dyn Storage<Squadron>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SquadronRepository for StorageSquadronRepository {
    async fn get(&self, name: &SquadronName) -> Result<Option<Squadron>, DomainError> {
        self.storage.get(name).await
    }

    async fn list(&self) -> Result<Vec<Squadron>, DomainError> {
        self.storage.list().await
    }

    async fn create(&self, squadron: Squadron) -> Result<Squadron, DomainError> {
        if self.storage.exists(squadron.name()).await? {
            return Err(DomainError::conflict(format!(
                "Squadron '{}' already exists",
                squadron.name()
            )));
        }

        self.storage.create(squadron).await
    }

    async fn exists(&self, name: &SquadronName) -> Result<bool, DomainError> {
        self.storage.exists(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageSquadronRepository {
        let storage = Arc::new(InMemoryStorage::<Squadron>::new());
        StorageSquadronRepository::new(storage)
    }

    fn create_squadron(name: &str, members: &[&str]) -> Squadron {
        Squadron::new(SquadronName::new(name).unwrap(), members.iter().copied())
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = create_repo();
        let squadron = create_squadron("JL", &["Batman", "Wonder Woman"]);

        repo.create(squadron.clone()).await.unwrap();

        let retrieved = repo.get(squadron.name()).await.unwrap();
        assert_eq!(retrieved, Some(squadron));
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = create_repo();

        repo.create(create_squadron("JL", &["Batman"])).await.unwrap();

        let result = repo.create(create_squadron("JL", &["Superman"])).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        let stored = repo
            .get(&SquadronName::new("JL").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.has_member("Batman"));
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let repo = create_repo();

        repo.create(create_squadron("Titans", &["Robin"])).await.unwrap();
        repo.create(create_squadron("JL", &["Batman"])).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Titans", "JL"]);
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = create_repo();
        let name = SquadronName::new("JL").unwrap();

        assert!(!repo.exists(&name).await.unwrap());
        repo.create(create_squadron("JL", &[])).await.unwrap();
        assert!(repo.exists(&name).await.unwrap());
    }
}
