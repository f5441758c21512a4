//! Storage-backed hero repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::hero::{Hero, HeroAlias, HeroRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of HeroRepository
#[derive(Debug)]
pub struct StorageHeroRepository {
    storage: Arc<dyn Storage<Hero>>,
}

impl StorageHeroRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Hero>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl HeroRepository for StorageHeroRepository {
    async fn get(&self, alias: &HeroAlias) -> Result<Option<Hero>, DomainError> {
        self.storage.get(alias).await
    }

    async fn list(&self) -> Result<Vec<Hero>, DomainError> {
        self.storage.list().await
    }

    async fn create(&self, hero: Hero) -> Result<Hero, DomainError> {
        if self.storage.exists(hero.alias()).await? {
            return Err(DomainError::conflict(format!(
                "Hero '{}' already exists",
                hero.alias()
            )));
        }

        self.storage.create(hero).await
    }

    async fn update(&self, hero: Hero) -> Result<Hero, DomainError> {
        if !self.storage.exists(hero.alias()).await? {
            return Err(DomainError::not_found(format!(
                "Hero '{}' not found",
                hero.alias()
            )));
        }

        self.storage.update(hero).await
    }

    async fn delete(&self, alias: &HeroAlias) -> Result<bool, DomainError> {
        self.storage.delete(alias).await
    }

    async fn exists(&self, alias: &HeroAlias) -> Result<bool, DomainError> {
        self.storage.exists(alias).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageHeroRepository {
        let storage = Arc::new(InMemoryStorage::<Hero>::new());
        StorageHeroRepository::new(storage)
    }

    fn create_hero(alias: &str) -> Hero {
        Hero::new(HeroAlias::new(alias).unwrap())
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = create_repo();
        let hero = create_hero("Batman").with_origin("Gotham City");

        repo.create(hero.clone()).await.unwrap();

        let retrieved = repo.get(hero.alias()).await.unwrap();
        assert_eq!(retrieved, Some(hero));
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = create_repo();

        repo.create(create_hero("Batman")).await.unwrap();

        let result = repo.create(create_hero("Batman")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = create_repo();
        repo.create(create_hero("Batman")).await.unwrap();

        let alias = HeroAlias::new("Batman").unwrap();
        let mut hero = repo.get(&alias).await.unwrap().unwrap();
        hero.set_archenemy(&HeroAlias::new("Joker").unwrap());
        repo.update(hero).await.unwrap();

        let retrieved = repo.get(&alias).await.unwrap().unwrap();
        assert_eq!(retrieved.archenemy(), Some("Joker"));
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = create_repo();

        let result = repo.update(create_hero("Batman")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repo = create_repo();
        let hero = create_hero("Batman");

        assert!(!repo.exists(hero.alias()).await.unwrap());
        repo.create(hero.clone()).await.unwrap();
        assert!(repo.exists(hero.alias()).await.unwrap());

        assert!(repo.delete(hero.alias()).await.unwrap());
        assert!(!repo.exists(hero.alias()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let repo = create_repo();

        repo.create(create_hero("Superman")).await.unwrap();
        repo.create(create_hero("Batman")).await.unwrap();

        let heroes = repo.list().await.unwrap();
        assert_eq!(heroes[0].alias().as_str(), "Superman");
        assert_eq!(heroes[1].alias().as_str(), "Batman");
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
