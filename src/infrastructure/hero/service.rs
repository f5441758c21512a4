//! Hero store service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::hero::{Hero, HeroAlias, HeroError, HeroRepository};
use crate::infrastructure::storage::RosterLock;

/// Request for creating a new hero
#[derive(Debug, Clone, Default)]
pub struct CreateHeroRequest {
    pub alias: String,
    pub origin: Option<String>,
    pub approval_rate: Option<String>,
    pub archenemy: Option<String>,
}

/// Owns every read and write of hero records
#[derive(Debug)]
pub struct HeroService<R: HeroRepository> {
    repository: Arc<R>,
    lock: RosterLock,
}

impl<R: HeroRepository> HeroService<R> {
    /// Create a new hero service sharing `lock` with the other roster services
    pub fn new(repository: Arc<R>, lock: RosterLock) -> Self {
        Self { repository, lock }
    }

    /// List every hero in store order
    pub async fn list(&self) -> Result<Vec<Hero>, HeroError> {
        let _guard = self.lock.read().await;
        Ok(self.repository.list().await?)
    }

    /// Create a new hero.
    ///
    /// The archenemy is stored as given; it is not required to name a known hero.
    pub async fn create(&self, request: CreateHeroRequest) -> Result<Hero, HeroError> {
        info!(alias = %request.alias, "Creating hero");

        let alias = HeroAlias::new(request.alias.as_str())
            .map_err(|_| HeroError::duplicate_alias(request.alias.as_str()))?;

        let _guard = self.lock.write().await;

        if self.repository.exists(&alias).await? {
            return Err(HeroError::duplicate_alias(request.alias));
        }

        let mut hero = Hero::new(alias);

        if let Some(origin) = request.origin {
            hero = hero.with_origin(origin);
        }

        if let Some(approval_rate) = request.approval_rate {
            hero = hero.with_approval_rate(approval_rate);
        }

        if let Some(archenemy) = request.archenemy {
            hero = hero.with_archenemy(archenemy);
        }

        Ok(self.repository.create(hero).await?)
    }

    /// Get a hero by alias
    pub async fn find(&self, alias: &str) -> Result<Hero, HeroError> {
        debug!(alias = %alias, "Looking up hero");

        let key = HeroAlias::new(alias).map_err(|_| HeroError::not_found(alias))?;

        let _guard = self.lock.read().await;

        self.repository
            .get(&key)
            .await?
            .ok_or_else(|| HeroError::not_found(alias))
    }

    /// Point a hero's archenemy at another existing hero
    pub async fn set_archenemy(
        &self,
        hero_alias: &str,
        villain_alias: &str,
    ) -> Result<Hero, HeroError> {
        info!(hero = %hero_alias, villain = %villain_alias, "Setting archenemy");

        let hero_key = HeroAlias::new(hero_alias).map_err(|_| HeroError::not_found(hero_alias))?;

        let _guard = self.lock.write().await;

        let mut hero = self
            .repository
            .get(&hero_key)
            .await?
            .ok_or_else(|| HeroError::not_found(hero_alias))?;

        let villain_key = HeroAlias::new(villain_alias)
            .map_err(|_| HeroError::villain_not_found(villain_alias))?;

        if !self.repository.exists(&villain_key).await? {
            return Err(HeroError::villain_not_found(villain_alias));
        }

        hero.set_archenemy(&villain_key);
        Ok(self.repository.update(hero).await?)
    }

    /// Delete a hero. Squadrons that reference it keep the reference.
    pub async fn delete(&self, alias: &str) -> Result<(), HeroError> {
        info!(alias = %alias, "Deleting hero");

        let key = HeroAlias::new(alias).map_err(|_| HeroError::not_found(alias))?;

        let _guard = self.lock.write().await;

        if self.repository.delete(&key).await? {
            Ok(())
        } else {
            Err(HeroError::not_found(alias))
        }
    }

    /// Count heroes
    pub async fn count(&self) -> Result<usize, HeroError> {
        let _guard = self.lock.read().await;
        Ok(self.repository.count().await?)
    }
}
