//! Hero repository trait

use async_trait::async_trait;

use super::entity::{Hero, HeroAlias};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for hero records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync + std::fmt::Debug {
    /// Get a hero by alias
    async fn get(&self, alias: &HeroAlias) -> Result<Option<Hero>, DomainError>;

    /// List all heroes in insertion order
    async fn list(&self) -> Result<Vec<Hero>, DomainError>;

    /// Create a new hero
    async fn create(&self, hero: Hero) -> Result<Hero, DomainError>;

    /// Update an existing hero
    async fn update(&self, hero: Hero) -> Result<Hero, DomainError>;

    /// Delete a hero by alias
    async fn delete(&self, alias: &HeroAlias) -> Result<bool, DomainError>;

    /// Check if a hero exists
    async fn exists(&self, alias: &HeroAlias) -> Result<bool, DomainError>;

    /// Count heroes
    async fn count(&self) -> Result<usize, DomainError>;
}
