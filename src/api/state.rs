//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Hero, HeroError, HeroRepository, Squadron, SquadronError, SquadronRepository};
use crate::infrastructure::hero::{CreateHeroRequest, HeroService};
use crate::infrastructure::squadron::{CreateSquadronRequest, SquadronService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub hero_service: Arc<dyn HeroServiceTrait>,
    pub squadron_service: Arc<dyn SquadronServiceTrait>,
}

/// Trait for hero store operations
#[async_trait::async_trait]
pub trait HeroServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Hero>, HeroError>;
    async fn find(&self, alias: &str) -> Result<Hero, HeroError>;
    async fn create(&self, request: CreateHeroRequest) -> Result<Hero, HeroError>;
    async fn set_archenemy(&self, hero_alias: &str, villain_alias: &str)
        -> Result<Hero, HeroError>;
    async fn delete(&self, alias: &str) -> Result<(), HeroError>;
    async fn count(&self) -> Result<usize, HeroError>;
}

/// Trait for squadron operations
#[async_trait::async_trait]
pub trait SquadronServiceTrait: Send + Sync {
    async fn create(&self, request: CreateSquadronRequest) -> Result<Squadron, SquadronError>;
    async fn candidates(&self, name: &str) -> Result<Vec<String>, SquadronError>;
    async fn list(&self) -> Result<Vec<Squadron>, SquadronError>;
    async fn find(&self, name: &str) -> Result<Squadron, SquadronError>;
}

#[async_trait::async_trait]
impl<R: HeroRepository + 'static> HeroServiceTrait for HeroService<R> {
    async fn list(&self) -> Result<Vec<Hero>, HeroError> {
        HeroService::list(self).await
    }

    async fn find(&self, alias: &str) -> Result<Hero, HeroError> {
        HeroService::find(self, alias).await
    }

    async fn create(&self, request: CreateHeroRequest) -> Result<Hero, HeroError> {
        HeroService::create(self, request).await
    }

    async fn set_archenemy(
        &self,
        hero_alias: &str,
        villain_alias: &str,
    ) -> Result<Hero, HeroError> {
        HeroService::set_archenemy(self, hero_alias, villain_alias).await
    }

    async fn delete(&self, alias: &str) -> Result<(), HeroError> {
        HeroService::delete(self, alias).await
    }

    async fn count(&self) -> Result<usize, HeroError> {
        HeroService::count(self).await
    }
}

#[async_trait::async_trait]
impl<H, S> SquadronServiceTrait for SquadronService<H, S>
where
    H: HeroRepository + 'static,
    S: SquadronRepository + 'static,
{
    async fn create(&self, request: CreateSquadronRequest) -> Result<Squadron, SquadronError> {
        SquadronService::create(self, request).await
    }

    async fn candidates(&self, name: &str) -> Result<Vec<String>, SquadronError> {
        SquadronService::candidates(self, name).await
    }

    async fn list(&self) -> Result<Vec<Squadron>, SquadronError> {
        SquadronService::list(self).await
    }

    async fn find(&self, name: &str) -> Result<Squadron, SquadronError> {
        SquadronService::find(self, name).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        hero_service: Arc<dyn HeroServiceTrait>,
        squadron_service: Arc<dyn SquadronServiceTrait>,
    ) -> Self {
        Self {
            hero_service,
            squadron_service,
        }
    }
}
