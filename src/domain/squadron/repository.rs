//! Squadron repository trait

use async_trait::async_trait;

use super::entity::{Squadron, SquadronName};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for squadrons
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SquadronRepository: Send + Sync + std::fmt::Debug {
    /// Get a squadron by name
    async fn get(&self, name: &SquadronName) -> Result<Option<Squadron>, DomainError>;

    /// List all squadrons in creation order
    async fn list(&self) -> Result<Vec<Squadron>, DomainError>;

    /// Create a new squadron
    async fn create(&self, squadron: Squadron) -> Result<Squadron, DomainError>;

    /// Check if a squadron exists
    async fn exists(&self, name: &SquadronName) -> Result<bool, DomainError>;
}
