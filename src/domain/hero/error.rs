//! Hero operation errors

use thiserror::Error;

use crate::domain::DomainError;

/// Errors returned by hero store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeroError {
    /// Alias was empty or already taken
    #[error("Hero alias '{0}' is empty or already in use")]
    DuplicateAlias(String),

    #[error("Hero '{0}' not found")]
    NotFound(String),

    /// The villain named in an archenemy update is not a known hero
    #[error("Villain '{0}' not found")]
    VillainNotFound(String),

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl HeroError {
    pub fn duplicate_alias(alias: impl Into<String>) -> Self {
        Self::DuplicateAlias(alias.into())
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound(alias.into())
    }

    pub fn villain_not_found(alias: impl Into<String>) -> Self {
        Self::VillainNotFound(alias.into())
    }
}
